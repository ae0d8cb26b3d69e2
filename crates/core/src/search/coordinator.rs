//! Search-as-you-type coordinator.
//!
//! Turns a stream of query edits into at most one catalog search per pause in
//! typing, and makes sure only the newest query's outcome reaches the state:
//! - every edit bumps a generation counter and restarts the debounce timer
//! - a search captures the generation it was dispatched under
//! - its outcome is applied only if that generation is still current
//!
//! Superseded requests are not cancelled; their results are dropped on arrival.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::types::{SearchPhase, SearchState};
use crate::catalog::BookCatalog;
use crate::config::SearchConfig;
use crate::metrics::STALE_RESULTS_DISCARDED;

/// Owns one search session.
pub struct SearchCoordinator {
    catalog: Arc<dyn BookCatalog>,
    debounce: Duration,
    state: Arc<watch::Sender<SearchState>>,
    pending_timer: Option<JoinHandle<()>>,
}

impl SearchCoordinator {
    /// Create a coordinator using the configured debounce window.
    pub fn new(catalog: Arc<dyn BookCatalog>, config: &SearchConfig) -> Self {
        Self::with_debounce(catalog, Duration::from_millis(config.debounce_ms))
    }

    /// Create a coordinator with an explicit debounce window.
    pub fn with_debounce(catalog: Arc<dyn BookCatalog>, debounce: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            catalog,
            debounce,
            state: Arc::new(state),
            pending_timer: None,
        }
    }

    /// Receive a new snapshot on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// Record a query edit.
    ///
    /// A blank query returns the session to `Idle` right away. Anything else
    /// enters `Debouncing` and searches once the debounce window passes
    /// without another edit.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.cancel_timer();

        let blank = query.trim().is_empty();
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.query = query.clone();
            state.phase = if blank {
                SearchPhase::Idle
            } else {
                SearchPhase::Debouncing
            };
        });

        if blank {
            debug!(generation, "Query cleared");
            return;
        }

        debug!(generation, query = %query, "Query changed, debouncing");

        let state = Arc::clone(&self.state);
        let catalog = Arc::clone(&self.catalog);
        let debounce = self.debounce;

        self.pending_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            if !apply_if_current(&state, generation, SearchPhase::Loading) {
                return;
            }

            // Detached so that a later edit, which aborts the timer, leaves
            // the request alone.
            tokio::spawn(run_search(state, catalog, generation, query));
        }));
    }

    /// Cancel the pending debounce timer, if any.
    pub fn shutdown(&mut self) {
        self.cancel_timer();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.pending_timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

async fn run_search(
    state: Arc<watch::Sender<SearchState>>,
    catalog: Arc<dyn BookCatalog>,
    generation: u64,
    query: String,
) {
    debug!(generation, query = %query, "Dispatching search");

    let phase = match catalog.search(&query).await {
        Ok(books) if books.is_empty() => SearchPhase::Empty,
        Ok(books) => SearchPhase::Success(books),
        Err(e) => SearchPhase::Error(e.to_string()),
    };

    if apply_if_current(&state, generation, phase) {
        debug!(generation, "Search result applied");
    } else {
        debug!(generation, query = %query, "Discarding stale search result");
        STALE_RESULTS_DISCARDED.inc();
    }
}

/// Set `phase` only if no edit happened since `generation` was issued.
///
/// Check and update happen under the channel's write lock.
fn apply_if_current(
    state: &watch::Sender<SearchState>,
    generation: u64,
    phase: SearchPhase,
) -> bool {
    state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        current.phase = phase;
        true
    })
}
