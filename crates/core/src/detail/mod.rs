//! Book detail loading.
//!
//! A detail view starts from the book the user picked in the results and
//! concurrently refreshes it from the catalog and looks it up on the
//! bestseller lists. Neither step can fail the view.

use futures::join;
use serde::Serialize;
use tracing::debug;

use crate::bestseller::BestsellerSource;
use crate::book::{BestsellerInfo, Book};
use crate::catalog::BookCatalog;

/// Everything a detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub book: Book,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bestseller: Option<BestsellerInfo>,
}

/// Refresh `initial` from the catalog and attach bestseller placement.
///
/// The bestseller lookup matches against `initial`, so it does not wait for
/// the refresh. A failed refresh keeps `initial` as-is.
pub async fn load_book_details(
    catalog: &dyn BookCatalog,
    bestseller: &dyn BestsellerSource,
    initial: Book,
) -> BookDetails {
    let (refreshed, placement) = join!(catalog.get_by_id(&initial.id), bestseller.lookup(&initial));

    let book = match refreshed {
        Some(book) => book,
        None => {
            debug!(id = %initial.id, "Detail refresh unavailable, keeping search result");
            initial
        }
    };

    BookDetails {
        book,
        bestseller: placement,
    }
}
