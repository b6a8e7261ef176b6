//! UI error types

use crate::search::SearchError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or input failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The search layer reported an error the UI cannot recover from
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
