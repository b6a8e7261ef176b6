//! Response-shape validation
//!
//! Converts wire records into domain items. A response is accepted only if
//! every record in it is valid; a single bad record rejects the whole page so
//! that callers never render a partially corrupt result set.
//!
//! Required per photo: a non-blank id, a non-blank author name and http(s)
//! URLs for every image size. The author profile link is taken from
//! `portfolio_url`, falling back to `links.html`; a photo with neither is
//! still accepted and the detail view simply has no profile link to open.

use super::error::{ApiError, Result};
use super::types::{WirePhoto, WireSearchResponse};
use crate::search::{Author, ImageUrls, Item, SearchPage};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Parse and validate a raw response body
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body is not the expected JSON shape and
/// `ApiError::Malformed` if it decodes but fails validation.
pub fn parse_search_body(body: &str) -> Result<SearchPage> {
    let response: WireSearchResponse = serde_json::from_str(body)?;
    SearchPage::try_from(response)
}

impl TryFrom<WireSearchResponse> for SearchPage {
    type Error = ApiError;

    fn try_from(response: WireSearchResponse) -> Result<Self> {
        if !response.results.is_empty() && response.total_pages == 0 {
            return Err(ApiError::Malformed(format!(
                "{} result(s) returned but total_pages is 0",
                response.results.len()
            )));
        }

        let mut seen = HashSet::with_capacity(response.results.len());
        let mut items = Vec::with_capacity(response.results.len());

        for (idx, photo) in response.results.into_iter().enumerate() {
            let item = Item::try_from(photo)
                .map_err(|e| ApiError::Malformed(format!("result {idx}: {e}")))?;

            if !seen.insert(item.id.clone()) {
                return Err(ApiError::Malformed(format!(
                    "result {idx}: duplicate id '{}'",
                    item.id
                )));
            }
            items.push(item);
        }

        Ok(Self {
            items,
            total_pages: response.total_pages,
            total: response.total,
        })
    }
}

impl TryFrom<WirePhoto> for Item {
    type Error = String;

    fn try_from(photo: WirePhoto) -> std::result::Result<Self, String> {
        if photo.id.trim().is_empty() {
            return Err("empty id".to_string());
        }
        if photo.user.name.trim().is_empty() {
            return Err(format!("photo '{}' has no author name", photo.id));
        }

        check_url(&photo.id, "small", &photo.urls.small)?;
        check_url(&photo.id, "regular", &photo.urls.regular)?;
        check_url(&photo.id, "full", &photo.urls.full)?;

        let profile_url = photo
            .user
            .portfolio_url
            .filter(|u| is_http_url(u))
            .or_else(|| {
                photo
                    .user
                    .links
                    .and_then(|l| l.html)
                    .filter(|u| is_http_url(u))
            });

        // Unparseable timestamps are dropped rather than rejecting the photo.
        let created_at = photo
            .created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Self {
            id: photo.id,
            urls: ImageUrls {
                small: photo.urls.small,
                regular: photo.urls.regular,
                full: photo.urls.full,
            },
            description: photo.description,
            alt_description: photo.alt_description,
            likes: photo.likes,
            downloads: photo.downloads,
            author: Author {
                name: photo.user.name,
                username: photo.user.username,
                profile_url,
            },
            width: photo.width,
            height: photo.height,
            created_at,
        })
    }
}

fn is_http_url(url: &str) -> bool {
    let url = url.trim();
    (url.starts_with("https://") || url.starts_with("http://")) && !url.contains(char::is_whitespace)
}

fn check_url(id: &str, size: &str, url: &str) -> std::result::Result<(), String> {
    if is_http_url(url) {
        Ok(())
    } else {
        Err(format!("photo '{id}' has an invalid {size} url '{url}'"))
    }
}
