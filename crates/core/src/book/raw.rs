//! Wire shapes of the book catalog API.
//!
//! Every field the catalog may omit is optional, and a field of the wrong type
//! degrades to absent, so that any response shape deserializes. Items that are
//! not objects are dropped from the result list.

use serde::{Deserialize, Serialize};

use super::types::Book;
use crate::lenient;

pub const ISBN_13: &str = "ISBN_13";
pub const ISBN_10: &str = "ISBN_10";

/// Body of a volume search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchResponse {
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Option<Vec<RawVolume>>,
}

/// A single catalog volume (search item or by-id body).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVolume {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(
        default,
        rename = "volumeInfo",
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_info: Option<RawVolumeInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVolumeInfo {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub authors: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_links: Option<RawImageLinks>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_rating: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub ratings_count: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub industry_identifiers: Option<Vec<RawIdentifier>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawImageLinks {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIdentifier {
    #[serde(default, rename = "type", deserialize_with = "lenient::or_default")]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub identifier: Option<String>,
}

/// Maps a canonical book back onto the catalog's shape.
impl From<&Book> for RawVolume {
    fn from(book: &Book) -> Self {
        let identifiers = book.isbn.as_ref().map(|isbn| {
            let kind = if isbn.len() == 13 { ISBN_13 } else { ISBN_10 };
            vec![RawIdentifier {
                kind: kind.to_string(),
                identifier: Some(isbn.clone()),
            }]
        });

        Self {
            id: book.id.clone(),
            volume_info: Some(RawVolumeInfo {
                title: Some(book.title.clone()),
                authors: Some(book.authors.clone()),
                published_date: Some(book.published_year.clone()),
                image_links: book.thumbnail.as_ref().map(|t| RawImageLinks {
                    thumbnail: Some(t.clone()),
                }),
                average_rating: book.average_rating,
                ratings_count: book.ratings_count,
                description: book.description.clone(),
                industry_identifiers: identifiers,
            }),
        }
    }
}
