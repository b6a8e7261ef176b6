//! Blocking HTTP client for the Unsplash-compatible search endpoint
//!
//! ```no_run
//! use imgseek::api::{ImageSearch, SearchRequest, UnsplashClient};
//! use imgseek::config::ApiConfig;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig {
//!     access_key: Some("my-access-key".into()),
//!     ..ApiConfig::default()
//! };
//! let client = UnsplashClient::new(&config)?;
//! let page = client.search(&SearchRequest::new("mountain", 1))?;
//! println!("{} of {} pages", page.items.len(), page.total_pages);
//! # Ok(())
//! # }
//! ```

use super::error::{ApiError, Result};
use super::traits::{ImageSearch, SearchRequest};
use super::validate::parse_search_body;
use crate::config::ApiConfig;
use crate::search::SearchPage;
use reqwest::blocking::{Client, Request};
use std::fmt;
use std::time::Duration;
use tracing::debug;

const SEARCH_PATH: &str = "/search/photos";
const API_VERSION: &str = "v1";

/// Service access key
///
/// Kept out of `Debug` output so it never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Wrap a key, rejecting blank values
    #[must_use]
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    /// The raw key value
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

/// HTTP-backed [`ImageSearch`] implementation
pub struct UnsplashClient {
    http: Client,
    base_url: String,
    access_key: AccessKey,
}

impl UnsplashClient {
    /// Build a client from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingCredential` if no access key is configured,
    /// `ApiError::InvalidConfig` if the base URL is not http(s), and
    /// `ApiError::Network` if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let access_key = config
            .access_key
            .clone()
            .and_then(AccessKey::new)
            .ok_or(ApiError::MissingCredential)?;

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ApiError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            access_key,
        })
    }

    /// Base URL requests are sent to (without trailing slash)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the outbound request without sending it
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the URL cannot be assembled.
    pub fn build_request(&self, request: &SearchRequest) -> Result<Request> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        let page = request.page.to_string();
        let per_page = request.per_page.to_string();
        let req = self
            .http
            .get(url)
            .header("Accept-Version", API_VERSION)
            .query(&[
                ("query", request.query.as_str()),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
                ("client_id", self.access_key.expose()),
            ])
            .build()?;
        Ok(req)
    }
}

impl fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("base_url", &self.base_url)
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

impl ImageSearch for UnsplashClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        debug!(query = %request.query, page = request.page, per_page = request.per_page, "sending search request");

        let response = self.http.execute(self.build_request(request)?)?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_search_body(&body)
    }
}

/// Pull a readable message out of an error body
///
/// The service reports errors as `{"errors": ["..."]}`; anything else is
/// passed through (truncated).
fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        errors: Vec<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && !parsed.errors.is_empty()
    {
        return parsed.errors.join("; ");
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "(empty body)".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
