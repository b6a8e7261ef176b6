//! Selection / detail state
//!
//! The item currently opened in the detail view. The selection is an owned
//! snapshot, so it stays valid when the result set is replaced. The view is
//! visible exactly when an item is held.

use crate::search::models::Item;

/// At most one item opened for detailed viewing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    item: Option<Item>,
}

impl Selection {
    /// Nothing selected
    #[must_use]
    pub const fn new() -> Self {
        Self { item: None }
    }

    /// Open `item` in the detail view, replacing any previous selection
    pub fn open(&mut self, item: Item) {
        self.item = Some(item);
    }

    /// Close the detail view
    ///
    /// Returns whether anything was open. Closing twice is fine.
    pub fn close(&mut self) -> bool {
        self.item.take().is_some()
    }

    /// The selected item, if the detail view is visible
    #[must_use]
    pub const fn current(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Whether the detail view is visible
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.item.is_some()
    }
}
