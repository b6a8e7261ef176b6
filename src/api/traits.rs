//! Core trait for the remote search collaborator

use super::error::Result;
use crate::search::SearchPage;

/// Default number of images requested per page
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Parameters for one page lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query, sent verbatim
    pub query: String,
    /// 1-based page number
    pub page: u32,
    /// Number of results per page
    pub per_page: u32,
}

impl SearchRequest {
    /// Create a request for the given query and page with the default page size
    #[must_use]
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Override the page size
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// Trait for image search backends
///
/// Abstracts the remote service so the search controller and its tests never
/// depend on a live HTTP endpoint. Implementations must be shareable across
/// threads because requests run on background workers.
pub trait ImageSearch: Send + Sync {
    /// Fetch one page of results
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// response body that fails validation.
    fn search(&self, request: &SearchRequest) -> Result<SearchPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_twenty_per_page() {
        let request = SearchRequest::new("mountain", 1);
        assert_eq!(request.per_page, 20);
        assert_eq!(request.page, 1);
        assert_eq!(request.query, "mountain");
    }

    #[test]
    fn test_request_with_per_page() {
        let request = SearchRequest::new("cats", 3).with_per_page(30);
        assert_eq!(request.per_page, 30);
    }
}
