//! Book catalog integration.
//!
//! The catalog answers free-text searches and single-volume lookups. Search
//! failures are classified into three user-presentable kinds; lookups by id
//! never fail and report every problem as "no book".

mod google_books;

pub use google_books::{GoogleBooksClient, MAX_RESULTS};

use async_trait::async_trait;
use thiserror::Error;

use crate::book::Book;

/// Errors a catalog search can surface to the user.
///
/// The display text of each variant is the message shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request never got an HTTP response (DNS, connection, timeout).
    #[error("Network error. Please check your connection")]
    NetworkError,

    /// HTTP 429.
    #[error("Too many requests")]
    RateLimited,

    /// Any other non-success status, or an unreadable success body.
    #[error("Could not load books. Try again.")]
    RequestFailed,
}

impl CatalogError {
    /// Short machine-readable name, used for metric labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::RequestFailed => "request_failed",
        }
    }
}

/// Trait for book catalog clients.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Search the catalog.
    ///
    /// A blank query yields an empty list without touching the network.
    /// Results keep the catalog's order.
    async fn search(&self, query: &str) -> Result<Vec<Book>, CatalogError>;

    /// Fetch a single book. Any failure is reported as `None`.
    async fn get_by_id(&self, id: &str) -> Option<Book>;
}
