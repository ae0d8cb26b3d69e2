//! Mock book catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::book::Book;
use crate::catalog::{BookCatalog, CatalogError};

/// A recorded catalog call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCatalogQuery {
    Search { query: String },
    GetById { id: String },
}

/// Mock implementation of the BookCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configured results per exact query
/// - Track calls for assertions
/// - Simulate failures and slow responses
///
/// # Example
///
/// ```rust,ignore
/// use bookfinder_core::testing::{MockBookCatalog, fixtures};
///
/// let catalog = MockBookCatalog::new();
/// catalog.set_results("dune", vec![fixtures::book("1", "Dune", "Frank Herbert")]).await;
/// catalog.set_delay("dune", Duration::from_millis(500)).await;
///
/// let books = catalog.search("dune").await?;
/// assert_eq!(catalog.searched_queries().await, vec!["dune"]);
/// ```
#[derive(Debug)]
pub struct MockBookCatalog {
    /// Search results by exact query.
    results: Arc<RwLock<HashMap<String, Vec<Book>>>>,
    /// Artificial search latency by exact query.
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    /// Books returned by `get_by_id`.
    books: Arc<RwLock<HashMap<String, Book>>>,
    /// Artificial `get_by_id` latency.
    lookup_delay: Arc<RwLock<Option<Duration>>>,
    /// Recorded calls.
    queries: Arc<RwLock<Vec<RecordedCatalogQuery>>>,
    /// If set, the next search will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockBookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBookCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(HashMap::new())),
            delays: Arc::new(RwLock::new(HashMap::new())),
            books: Arc::new(RwLock::new(HashMap::new())),
            lookup_delay: Arc::new(RwLock::new(None)),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Search Configuration
    // =========================================================================

    /// Set the results for an exact query.
    pub async fn set_results(&self, query: &str, books: Vec<Book>) {
        self.results.write().await.insert(query.to_string(), books);
    }

    /// Delay responses to an exact query.
    pub async fn set_delay(&self, query: &str, delay: Duration) {
        self.delays.write().await.insert(query.to_string(), delay);
    }

    // =========================================================================
    // Lookup Configuration
    // =========================================================================

    /// Add a book returned by `get_by_id`.
    pub async fn add_book(&self, book: Book) {
        self.books.write().await.insert(book.id.clone(), book);
    }

    /// Delay every `get_by_id` response.
    pub async fn set_lookup_delay(&self, delay: Duration) {
        *self.lookup_delay.write().await = Some(delay);
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded calls.
    pub async fn recorded_queries(&self) -> Vec<RecordedCatalogQuery> {
        self.queries.read().await.clone()
    }

    /// Queries passed to `search`, in call order.
    pub async fn searched_queries(&self) -> Vec<String> {
        self.queries
            .read()
            .await
            .iter()
            .filter_map(|q| match q {
                RecordedCatalogQuery::Search { query } => Some(query.clone()),
                RecordedCatalogQuery::GetById { .. } => None,
            })
            .collect()
    }

    /// Ids passed to `get_by_id`, in call order.
    pub async fn looked_up_ids(&self) -> Vec<String> {
        self.queries
            .read()
            .await
            .iter()
            .filter_map(|q| match q {
                RecordedCatalogQuery::GetById { id } => Some(id.clone()),
                RecordedCatalogQuery::Search { .. } => None,
            })
            .collect()
    }

    /// Clear recorded calls.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    /// Get the number of calls performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error.
    pub async fn clear_next_error(&self) {
        *self.next_error.write().await = None;
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    /// Record a call.
    async fn record(&self, query: RecordedCatalogQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl BookCatalog for MockBookCatalog {
    async fn search(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.record(RecordedCatalogQuery::Search {
            query: query.to_string(),
        })
        .await;

        let error = self.take_error().await;

        let delay = self.delays.read().await.get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = error {
            return Err(err);
        }

        Ok(self
            .results
            .read()
            .await
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_by_id(&self, id: &str) -> Option<Book> {
        self.record(RecordedCatalogQuery::GetById { id: id.to_string() })
            .await;

        let delay = *self.lookup_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.books.read().await.get(id).cloned()
    }
}
