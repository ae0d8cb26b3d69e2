//! Debounced search sessions.

mod coordinator;
mod types;

pub use coordinator::SearchCoordinator;
pub use types::{SearchPhase, SearchState};
