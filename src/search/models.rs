//! Data models for search results
//!
//! These are pure data structures with minimal logic. Items arrive from the
//! remote service already validated (see [`crate::api::validate`]) and are
//! never mutated afterwards: a result set is replaced wholesale on every
//! successful fetch.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Title shown in the detail view when an image has no alt text
pub const DEFAULT_TITLE: &str = "Image Details";

/// Description shown in the detail view when an image has none
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// One image returned by the search service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Unique identifier assigned by the service
    pub id: String,

    /// Image URLs at each size we use
    pub urls: ImageUrls,

    /// Free-text description written by the photographer
    pub description: Option<String>,

    /// Short alternative text, used as the item's title
    pub alt_description: Option<String>,

    /// Like counter
    pub likes: u64,

    /// Download counter (the service omits it on some endpoints)
    pub downloads: Option<u64>,

    /// Photographer attribution
    pub author: Author,

    /// Original width in pixels (0 if unknown)
    pub width: u32,

    /// Original height in pixels (0 if unknown)
    pub height: u32,

    /// When the image was published
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Title for the detail view: alt text, or a generic fallback
    #[must_use]
    pub fn title(&self) -> &str {
        self.alt_description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    /// Description for the detail view, or a fallback sentence
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Pixel dimensions, if the service reported them
    #[must_use]
    pub const fn dimensions(&self) -> Option<(u32, u32)> {
        if self.width > 0 && self.height > 0 {
            Some((self.width, self.height))
        } else {
            None
        }
    }
}

/// Image URLs by size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUrls {
    /// Small preview, used in result lists
    pub small: String,
    /// Medium resolution, used only in the detail view
    pub regular: String,
    /// Full resolution, used for downloads
    pub full: String,
}

/// Photographer attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Display name
    pub name: String,
    /// Account handle
    pub username: Option<String>,
    /// Portfolio or profile page
    pub profile_url: Option<String>,
}

/// One validated page of search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    /// Items in ranking order
    pub items: Vec<Item>,
    /// Total number of pages available for this query
    pub total_pages: u32,
    /// Total number of matching images across all pages
    pub total: u64,
}

impl SearchPage {
    /// A page with no results
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            total: 0,
        }
    }
}
