//! imgseek - search and browse a remote photo library from the terminal
//!
//! The heart of the crate is [`search::SearchController`], a synchronous
//! state machine for query, pagination, request lifecycle and selection.
//! Front ends (the one-shot `search` command and the ratatui browser) drive
//! it and run the fetch tickets it hands out against an
//! [`api::ImageSearch`] implementation.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ImgseekError {
    /// Search service error outside the controller (client construction)
    #[error("API error: {0}")]
    ApiError(#[from] api::ApiError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// A page could not be fetched
    #[error("{0}")]
    FetchFailed(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the binary
pub type Result<T> = std::result::Result<T, ImgseekError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: ImgseekError = api::ApiError::MissingCredential.into();
        assert!(err.to_string().starts_with("API error:"));

        let err: ImgseekError = search::SearchError::NoSelection.into();
        assert_eq!(err.to_string(), "Search error: No item is selected");

        let err: ImgseekError = ::config::ConfigError::Message("bad".into()).into();
        assert_eq!(err.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_fetch_failed_is_shown_verbatim() {
        let err = ImgseekError::FetchFailed(search::FETCH_ERROR_MESSAGE.to_string());
        assert_eq!(err.to_string(), search::FETCH_ERROR_MESSAGE);
    }
}
