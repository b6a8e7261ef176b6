//! Remote search error types
//!
//! Every way a call to the image search service can go wrong. The search
//! controller treats all of these identically (a failed fetch), but keeping
//! them distinct makes logs and the one-shot CLI output useful.
//!
//! # Error Types
//!
//! - **`Network`**: Transport failure (DNS, TLS, timeout, connection reset)
//! - **`Status`**: The service answered with a non-success HTTP status
//! - **`Decode`**: The body was not the JSON shape we expect
//! - **`Malformed`**: The body decoded but failed shape validation
//! - **`MissingCredential`**: No access key was configured

use thiserror::Error;

/// Errors returned by an [`ImageSearch`](super::ImageSearch) implementation
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the service
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Response body decoded but is missing or has invalid fields
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// No access key configured
    #[error("No access key configured. Run 'imgseek config set access_key=<KEY>' or set IMGSEEK_ACCESS_KEY")]
    MissingCredential,

    /// Client could not be built from the given configuration
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Result type for remote search operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
