//! Wire shapes of the bestseller overview API.
//!
//! Mistyped fields read as absent and malformed list elements are dropped, so
//! one bad entry never hides the rest of the overview.

use serde::Deserialize;

use crate::lenient;

/// Body of `lists/overview.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverviewResponse {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub results: Option<OverviewResults>,
}

impl OverviewResponse {
    /// All lists in source order.
    pub fn lists(&self) -> &[BestsellerList] {
        self.results
            .as_ref()
            .and_then(|r| r.lists.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverviewResults {
    #[serde(default, deserialize_with = "lenient::list")]
    pub lists: Option<Vec<BestsellerList>>,
}

/// One bestseller list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BestsellerList {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub list_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub books: Option<Vec<ListedBook>>,
}

impl BestsellerList {
    pub fn books(&self) -> &[ListedBook] {
        self.books.as_deref().unwrap_or_default()
    }
}

/// A book as it appears on a bestseller list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListedBook {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub weeks_on_list: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub primary_isbn13: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<String>,
}

impl ListedBook {
    /// Entry with just a title and author.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            ..Default::default()
        }
    }
}
