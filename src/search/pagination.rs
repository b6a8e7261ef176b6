//! Pagination state
//!
//! Tracks the current page and the last total page count reported by the
//! service. Navigation never goes below page 1 or past `total_pages`.

use serde::Serialize;

/// Current page and known total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    /// Start on page 1 with no known pages
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }

    /// 1-based current page
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total pages reported by the last successful fetch
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether a "previous" control should be enabled
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a "next" control should be enabled
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Move to page `n`
    ///
    /// Moving back is allowed to any page `>= 1`; moving forward only while
    /// the current page is before the last known page, and never past it.
    /// Returns `false` and leaves the state untouched otherwise.
    pub const fn set_page(&mut self, n: u32) -> bool {
        let allowed = if n < self.current_page {
            n >= 1
        } else if n > self.current_page {
            self.has_next() && n <= self.total_pages
        } else {
            false
        };

        if allowed {
            self.current_page = n;
        }
        allowed
    }

    /// Step back one page; returns the new page if moved
    pub const fn previous(&mut self) -> Option<u32> {
        if self.set_page(self.current_page.saturating_sub(1)) {
            Some(self.current_page)
        } else {
            None
        }
    }

    /// Step forward one page; returns the new page if moved
    pub const fn next(&mut self) -> Option<u32> {
        if self.set_page(self.current_page.saturating_add(1)) {
            Some(self.current_page)
        } else {
            None
        }
    }

    /// Back to page 1 (does not touch the total)
    pub const fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Page 1 of a query whose page count is not known yet
    ///
    /// Used when a new query is submitted: until its first page resolves,
    /// the previous query's total must not enable "next".
    pub const fn restart(&mut self) {
        self.current_page = 1;
        self.total_pages = 0;
    }

    /// Record the total reported by a successful fetch
    pub const fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total;
    }
}
