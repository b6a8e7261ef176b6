//! Query store
//!
//! Holds the submitted search text. It changes only on an explicit submit,
//! never on individual keystrokes.

/// The current search text
///
/// An empty store means "no search yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStore {
    current: String,
}

impl QueryStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: String::new(),
        }
    }

    /// Store `raw` verbatim if it contains anything besides whitespace
    ///
    /// Returns `false` (and leaves the store untouched) for blank text.
    pub fn submit(&mut self, raw: &str) -> bool {
        if is_blank(raw) {
            return false;
        }
        raw.clone_into(&mut self.current);
        true
    }

    /// The stored query (empty before the first submit)
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether a query has been submitted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

/// Whether `text` is empty or whitespace-only
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
