//! Canonical book records shared by every component.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Title used when the catalog omits one.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Author used when the catalog omits the author list.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A book as the rest of the system sees it, independent of the catalog's field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Catalog-assigned identifier.
    pub id: String,
    /// Title, never empty.
    pub title: String,
    /// Authors in source order, never empty.
    pub authors: Vec<String>,
    /// Four-character year, or empty when unknown.
    #[serde(default)]
    pub published_year: String,
    /// Cover thumbnail URL (always https).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Average rating (0-5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Number of ratings behind `average_rating`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u32>,
    /// Description, may contain markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISBN-13 when available, otherwise ISBN-10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl Book {
    /// Create a book with only the required fields set.
    ///
    /// An empty title or author list is replaced by the placeholders.
    pub fn new(id: impl Into<String>, title: impl Into<String>, authors: Vec<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            title: if title.is_empty() {
                UNKNOWN_TITLE.to_string()
            } else {
                title
            },
            authors: if authors.is_empty() {
                vec![UNKNOWN_AUTHOR.to_string()]
            } else {
                authors
            },
            published_year: String::new(),
            thumbnail: None,
            average_rating: None,
            ratings_count: None,
            description: None,
            isbn: None,
        }
    }

    /// Set the ISBN.
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// First-listed author, or `None` when the author is not known.
    pub fn primary_author(&self) -> Option<&str> {
        self.authors
            .first()
            .map(|a| a.as_str())
            .filter(|a| !a.trim().is_empty() && *a != UNKNOWN_AUTHOR)
    }

    /// Authors joined for display.
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// A rating only counts when at least one rating stands behind it.
    pub fn has_ratings(&self) -> bool {
        self.average_rating.is_some() && self.ratings_count.unwrap_or(0) > 0
    }

    /// Description with markup tags removed and whitespace collapsed.
    pub fn plain_description(&self) -> Option<String> {
        self.description.as_deref().map(|html| {
            let text = MARKUP_TAG.replace_all(html, " ");
            WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
        })
    }

    /// Higher resolution variant of the thumbnail for detail views.
    pub fn large_cover_url(&self) -> Option<String> {
        self.thumbnail
            .as_deref()
            .map(|url| url.replacen("zoom=1", "zoom=2", 1))
    }
}

/// Bestseller list placement for a book.
///
/// Computed on every detail lookup, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BestsellerInfo {
    /// Display name of the list.
    pub list_name: String,
    /// Position on the list.
    pub rank: u32,
    /// Weeks the book has been on the list.
    pub weeks_on_list: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BestsellerInfo {
    pub fn has_weeks(&self) -> bool {
        self.weeks_on_list > 0
    }
}
