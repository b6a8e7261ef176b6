//! Wire types for the image search service
//!
//! These mirror the JSON returned by `GET /search/photos` field-for-field.
//! They are only ever deserialized; validation into domain [`Item`]s happens
//! in [`super::validate`].
//!
//! [`Item`]: crate::search::Item

use serde::Deserialize;

/// Top-level search response
#[derive(Debug, Clone, Deserialize)]
pub struct WireSearchResponse {
    /// Total number of matching photos across all pages
    #[serde(default)]
    pub total: u64,
    /// Total number of pages for the requested page size
    pub total_pages: u32,
    /// Photos on this page, in ranking order
    pub results: Vec<WirePhoto>,
}

/// A single photo record
#[derive(Debug, Clone, Deserialize)]
pub struct WirePhoto {
    pub id: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub likes: u64,
    /// Not present on search results from every deployment
    #[serde(default)]
    pub downloads: Option<u64>,
    pub urls: WireUrls,
    pub user: WireUser,
}

/// Image URLs at the sizes we render
#[derive(Debug, Clone, Deserialize)]
pub struct WireUrls {
    pub small: String,
    pub regular: String,
    pub full: String,
}

/// Photographer attribution
#[derive(Debug, Clone, Deserialize)]
pub struct WireUser {
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub links: Option<WireUserLinks>,
}

/// Links attached to a photographer
#[derive(Debug, Clone, Deserialize)]
pub struct WireUserLinks {
    #[serde(default)]
    pub html: Option<String>,
}
