//! Actions on a single image
//!
//! These run outside the controller and never touch search state. Each
//! returns an `ActionOutcome` with plain data about what happened so the UI
//! layer decides how to present it.

use crate::search::error::{Result, SearchError};
use crate::search::models::Item;
use tracing::debug;

/// Result of an item action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Action completed
    Success {
        /// Human-readable summary
        details: String,
    },
    /// Action could not be completed
    Failed(String),
}

impl ActionOutcome {
    /// Whether the action completed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Message suitable for a status line
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { details } => details,
            Self::Failed(msg) => msg,
        }
    }
}

/// Open the full-resolution image with the system handler
///
/// This is the "download" action: the browser (or image viewer) takes it
/// from there.
#[must_use]
pub fn open_full_resolution(item: &Item) -> ActionOutcome {
    open_url(&item.urls.full, "Opened full-resolution image")
}

/// Open the photographer's portfolio or profile page
#[must_use]
pub fn open_author_profile(item: &Item) -> ActionOutcome {
    match profile_target(item) {
        Some(url) => open_url(url, &format!("Opened profile of {}", item.author.name)),
        None => ActionOutcome::Failed(format!(
            "{} has no profile link",
            item.author.name
        )),
    }
}

/// Copy the full-resolution URL to the system clipboard
///
/// # Errors
///
/// Returns `SearchError::Clipboard` if the clipboard is unavailable or
/// rejects the text.
pub fn copy_url(item: &Item) -> Result<ActionOutcome> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| SearchError::Clipboard(format!("unavailable: {e}")))?;
    clipboard
        .set_text(item.urls.full.clone())
        .map_err(|e| SearchError::Clipboard(e.to_string()))?;

    debug!(id = %item.id, "copied url to clipboard");
    Ok(ActionOutcome::Success {
        details: "Copied image URL to clipboard".to_string(),
    })
}

/// URL opened by `open_author_profile`, if any
#[must_use]
pub fn profile_target(item: &Item) -> Option<&str> {
    item.author
        .profile_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
}

fn open_url(url: &str, details: &str) -> ActionOutcome {
    debug!(url, "opening with system handler");
    match open::that(url) {
        Ok(()) => ActionOutcome::Success {
            details: details.to_string(),
        },
        Err(e) => ActionOutcome::Failed(format!("Failed to open {url}: {e}")),
    }
}
