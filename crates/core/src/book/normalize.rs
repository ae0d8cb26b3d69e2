//! Conversion from catalog volumes to canonical books.

use super::raw::{RawIdentifier, RawVolume, RawVolumeInfo, ISBN_10, ISBN_13};
use super::types::{Book, UNKNOWN_AUTHOR, UNKNOWN_TITLE};

/// Normalize a catalog volume into a [`Book`].
///
/// Total over every shape the catalog returns: missing or empty fields fall back
/// to their defaults instead of failing. The id is copied as-is.
pub fn normalize(raw: RawVolume) -> Book {
    let info = raw.volume_info.unwrap_or_default();
    let thumbnail = thumbnail(&info);
    let isbn = isbn(info.industry_identifiers.as_deref().unwrap_or_default());

    Book {
        id: raw.id,
        title: info
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        authors: info
            .authors
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| vec![UNKNOWN_AUTHOR.to_string()]),
        published_year: published_year(info.published_date.as_deref()),
        thumbnail,
        average_rating: info.average_rating,
        ratings_count: info.ratings_count,
        description: info.description,
        isbn,
    }
}

/// First four characters of the publication date, or empty.
fn published_year(date: Option<&str>) -> String {
    match date {
        Some(d) if d.chars().count() >= 4 => d.chars().take(4).collect(),
        _ => String::new(),
    }
}

fn thumbnail(info: &RawVolumeInfo) -> Option<String> {
    let link = info.image_links.as_ref()?.thumbnail.as_deref()?;
    if link.is_empty() {
        return None;
    }

    Some(match link.strip_prefix("http:") {
        Some(rest) => format!("https:{}", rest),
        None => link.to_string(),
    })
}

/// ISBN-13 wins over ISBN-10 regardless of list order.
fn isbn(identifiers: &[RawIdentifier]) -> Option<String> {
    let find = |kind: &str| {
        identifiers
            .iter()
            .filter(|i| i.kind == kind)
            .find_map(|i| i.identifier.clone().filter(|id| !id.is_empty()))
    };

    find(ISBN_13).or_else(|| find(ISBN_10))
}
