//! Testing utilities for imgseek
//!
//! Fixture builders for items and pages, plus `ScriptedSearch`, an in-memory
//! `ImageSearch` that records every request it receives.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, ImageSearch, SearchRequest};
use crate::search::{Author, ImageUrls, Item, SearchPage};
use std::sync::Mutex;

/// Build a valid item with the given id
///
/// URLs, author and text fields are filled with plausible values derived
/// from the id so tests can tell items apart.
#[must_use]
pub fn sample_item(id: &str) -> Item {
    Item {
        id: id.to_string(),
        urls: ImageUrls {
            small: format!("https://images.example.com/{id}?w=400"),
            regular: format!("https://images.example.com/{id}?w=1080"),
            full: format!("https://images.example.com/{id}"),
        },
        description: Some(format!("Description of {id}")),
        alt_description: Some(format!("photo {id}")),
        likes: 42,
        downloads: Some(1000),
        author: Author {
            name: "Ansel Adams".to_string(),
            username: Some("ansel".to_string()),
            profile_url: Some("https://example.com/@ansel".to_string()),
        },
        width: 3000,
        height: 2000,
        created_at: None,
    }
}

/// Page of `count` items with ids `{prefix}-0 .. {prefix}-{count-1}`
#[must_use]
pub fn sample_page(prefix: &str, count: usize, total_pages: u32) -> SearchPage {
    let items: Vec<Item> = (0..count)
        .map(|i| sample_item(&format!("{prefix}-{i}")))
        .collect();
    let total = u64::from(total_pages) * count as u64;
    SearchPage {
        items,
        total_pages,
        total,
    }
}

/// In-memory search service
///
/// Answers every query with `per_page` items and a fixed page count. Item ids
/// are `{query}-{page}-{n}`. Requests are recorded for later inspection and
/// queries listed in `failing` produce a server error instead.
pub struct ScriptedSearch {
    total_pages: u32,
    per_page: usize,
    failing: Vec<String>,
    calls: Mutex<Vec<SearchRequest>>,
}

impl ScriptedSearch {
    /// Service reporting `total_pages` pages of `per_page` items
    #[must_use]
    pub fn with_pages(total_pages: u32, per_page: usize) -> Self {
        Self {
            total_pages,
            per_page,
            failing: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every request for `query` fail
    #[must_use]
    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing.push(query.to_string());
        self
    }

    /// Requests received so far
    ///
    /// # Panics
    /// Panics if the call log mutex was poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<SearchRequest> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

impl ImageSearch for ScriptedSearch {
    fn search(&self, request: &SearchRequest) -> Result<SearchPage, ApiError> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(request.clone());

        if self.failing.iter().any(|q| q == &request.query) {
            return Err(ApiError::Status {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        let prefix = format!("{}-{}", request.query, request.page);
        Ok(sample_page(&prefix, self.per_page, self.total_pages))
    }
}
