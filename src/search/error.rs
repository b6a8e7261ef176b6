//! Search-specific error types
//!
//! Fetch failures never show up here: they are absorbed by the controller
//! and surfaced as `RequestState::Failed`. These errors cover misuse of the
//! controller surface and item actions.
//!
//! # Error Types
//!
//! - **`ItemNotFound`**: `select_item` was given an id outside the current results
//! - **`NoSelection`**: a detail-view action was requested with nothing open
//! - **`Clipboard`**: the system clipboard could not be reached
//! - **`WorkerDisconnected`**: the background fetch worker went away
//! - **`Spawn`**: a background fetch thread could not be started

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Requested item is not part of the current result set
    #[error("Item '{0}' is not in the current results")]
    ItemNotFound(String),

    /// No item is open in the detail view
    #[error("No item is selected")]
    NoSelection,

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Background worker channel closed
    #[error("Fetch worker disconnected")]
    WorkerDisconnected,

    /// Background thread could not be started
    #[error("Failed to start fetch thread: {0}")]
    Spawn(String),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
