//! Bestseller enrichment.
//!
//! Looks a catalog book up on the current bestseller lists. The lookup is
//! best-effort: a missing API key, a failed request or an unreadable body all
//! yield `None`, never an error.

mod matcher;
mod nyt;
mod types;

pub use matcher::{matches, normalize_text, same_text};
pub use nyt::NytClient;
pub use types::*;

use async_trait::async_trait;

use crate::book::{BestsellerInfo, Book};

/// List name used when the source leaves it out.
pub const DEFAULT_LIST_NAME: &str = "Bestseller";

/// Trait for bestseller list sources.
#[async_trait]
pub trait BestsellerSource: Send + Sync {
    /// Whether lookups can reach the source at all.
    fn is_enabled(&self) -> bool;

    /// Find the book on any current list.
    async fn lookup(&self, book: &Book) -> Option<BestsellerInfo>;
}

/// First entry, scanning lists then entries in source order, that matches `book`.
pub fn correlate(book: &Book, overview: &OverviewResponse) -> Option<BestsellerInfo> {
    overview.lists().iter().find_map(|list| {
        list.books()
            .iter()
            .find(|entry| matches(book, entry))
            .map(|entry| BestsellerInfo {
                list_name: list
                    .list_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| DEFAULT_LIST_NAME.to_string()),
                rank: entry.rank.unwrap_or(0),
                weeks_on_list: entry.weeks_on_list.unwrap_or(0),
                description: entry.description.clone(),
            })
    })
}
