//! Search session state exposed to the presentation layer.

use serde::Serialize;

use crate::book::Book;

/// Where the current query is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum SearchPhase {
    /// Blank query, nothing to show.
    Idle,
    /// Waiting for typing to pause.
    Debouncing,
    /// Request in flight.
    Loading,
    /// Non-empty results for the current query.
    Success(Vec<Book>),
    /// The current query found nothing.
    Empty,
    /// The search failed; holds the user-facing message.
    Error(String),
}

/// Snapshot of a search session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub phase: SearchPhase,
    /// Incremented on every query edit. Results are only applied when the
    /// generation they were dispatched under is still current.
    #[serde(skip)]
    pub(crate) generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            generation: 0,
        }
    }
}

impl SearchState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Results, empty outside of `Success`.
    pub fn results(&self) -> &[Book] {
        match &self.phase {
            SearchPhase::Success(books) => books,
            _ => &[],
        }
    }

    /// Error message, only set in `Error`.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Debouncing or loading.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SearchPhase::Debouncing | SearchPhase::Loading)
    }
}
