//! Mock bestseller source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::bestseller::BestsellerSource;
use crate::book::{BestsellerInfo, Book};

/// Mock implementation of the BestsellerSource trait.
///
/// Placements are keyed by exact book title. A disabled source answers
/// `None` to everything, like a client without an API key.
#[derive(Debug)]
pub struct MockBestsellerSource {
    enabled: bool,
    /// Placements by book title.
    placements: Arc<RwLock<HashMap<String, BestsellerInfo>>>,
    /// Titles passed to `lookup`.
    lookups: Arc<RwLock<Vec<String>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl Default for MockBestsellerSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBestsellerSource {
    /// Create an enabled source with no placements.
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Create a source that behaves as if no API key were configured.
    pub fn disabled() -> Self {
        Self::with_enabled(false)
    }

    fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            placements: Arc::new(RwLock::new(HashMap::new())),
            lookups: Arc::new(RwLock::new(Vec::new())),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Place the book with this title on a list.
    pub async fn add_placement(&self, title: &str, info: BestsellerInfo) {
        self.placements
            .write()
            .await
            .insert(title.to_string(), info);
    }

    /// Delay every lookup.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Titles looked up, in call order.
    pub async fn looked_up_titles(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl BestsellerSource for MockBestsellerSource {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn lookup(&self, book: &Book) -> Option<BestsellerInfo> {
        if !self.enabled {
            return None;
        }

        self.lookups.write().await.push(book.title.clone());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.placements.read().await.get(&book.title).cloned()
    }
}
