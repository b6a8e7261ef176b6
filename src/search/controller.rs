//! Search, pagination and selection controller
//!
//! The single owner of all search state. UI layers call the action methods
//! and render from the observers; they never see raw fetch errors.
//!
//! # Workflow
//!
//! ```text
//! submit_query(text) ──▶ page = 1 ──┐
//! go_to_next_page()  ──▶ page + 1 ──┼──▶ FetchRequest ──▶ caller runs it
//! go_to_previous_page() ▶ page - 1 ─┘                          │
//!                                                              ▼
//!              results / total_pages / state ◀── complete(FetchCompletion)
//!                                              (stale completions dropped)
//! ```
//!
//! Actions that need a fetch return the ticket instead of performing I/O,
//! which keeps the controller synchronous and lets tests deliver responses
//! in any order:
//!
//! ```
//! use imgseek::search::{FetchCompletion, Resolution, SearchController, SearchPage};
//!
//! let mut controller = SearchController::new();
//! let first = controller.submit_query("mountain").unwrap();
//! let second = controller.submit_query("lake").unwrap();
//!
//! // The older response arrives last and is ignored
//! let done = controller.complete(FetchCompletion::new(second, Ok(SearchPage::empty())));
//! assert!(matches!(done, Resolution::Loaded { .. }));
//! let late = controller.complete(FetchCompletion::new(first, Ok(SearchPage::empty())));
//! assert_eq!(late, Resolution::Stale);
//! assert_eq!(controller.query(), "lake");
//! ```

use super::error::{Result, SearchError};
use super::models::Item;
use super::orchestrator::{FetchCompletion, FetchOrchestrator, FetchRequest, RequestState};
use super::pagination::PageState;
use super::query::QueryStore;
use super::selection::Selection;
use tracing::{debug, info, warn};

/// What `complete` did with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Results replaced with a new page
    Loaded {
        /// Number of items now displayed
        items: usize,
        /// Total pages reported by the service
        total_pages: u32,
    },
    /// The latest fetch failed; previous results kept
    Failed,
    /// Completion was for a superseded request and was ignored
    Stale,
}

/// Owns query, pagination, fetch, result and selection state
#[derive(Debug, Default)]
pub struct SearchController {
    query: QueryStore,
    pages: PageState,
    orchestrator: FetchOrchestrator,
    results: Vec<Item>,
    total_results: u64,
    selection: Selection,
}

impl SearchController {
    /// Controller with the default page size (20)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller requesting `per_page` items per page
    #[must_use]
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            orchestrator: FetchOrchestrator::new(per_page),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Submit new search text
    ///
    /// Blank text is ignored entirely: no fetch, and results, state and page
    /// stay as they are. Otherwise the text is stored, the page resets to 1,
    /// the old page count is forgotten (so "next" stays disabled until the new
    /// query's first page arrives) and a fetch ticket is returned.
    pub fn submit_query(&mut self, text: &str) -> Option<FetchRequest> {
        if !self.query.submit(text) {
            debug!("blank query ignored");
            return None;
        }
        self.pages.restart();
        self.orchestrator
            .issue(self.query.current(), self.pages.current_page())
    }

    /// Step back one page, if there is one
    pub fn go_to_previous_page(&mut self) -> Option<FetchRequest> {
        if self.query.is_empty() {
            return None;
        }
        let page = self.pages.previous()?;
        self.orchestrator.issue(self.query.current(), page)
    }

    /// Step forward one page, if there is one
    pub fn go_to_next_page(&mut self) -> Option<FetchRequest> {
        if self.query.is_empty() {
            return None;
        }
        let page = self.pages.next()?;
        self.orchestrator.issue(self.query.current(), page)
    }

    /// Re-issue the current (query, page)
    ///
    /// Only ever called in response to a user action; failed fetches are
    /// never retried automatically.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        self.orchestrator
            .issue(self.query.current(), self.pages.current_page())
    }

    /// Apply the result of a fetch
    ///
    /// Completions for anything but the most recently issued request are
    /// dropped. On failure the previous results are left in place.
    pub fn complete(&mut self, completion: FetchCompletion) -> Resolution {
        if !self.orchestrator.accept(&completion) {
            debug!(
                seq = completion.request.seq,
                page = completion.request.page,
                "stale fetch result discarded"
            );
            return Resolution::Stale;
        }

        let FetchCompletion { request, outcome } = completion;
        match outcome {
            Ok(page) => {
                let items = page.items.len();
                self.results = page.items;
                self.total_results = page.total;
                self.pages.set_total_pages(page.total_pages);
                self.orchestrator.mark_success();
                info!(
                    query = %request.query,
                    page = request.page,
                    items,
                    total_pages = page.total_pages,
                    "results loaded"
                );
                Resolution::Loaded {
                    items,
                    total_pages: page.total_pages,
                }
            }
            Err(e) => {
                warn!(
                    query = %request.query,
                    page = request.page,
                    error = %e,
                    "fetch failed"
                );
                self.orchestrator.mark_failed();
                Resolution::Failed
            }
        }
    }

    /// Open the item with `id` in the detail view
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ItemNotFound` if no item in the current results
    /// has that id.
    pub fn select_item(&mut self, id: &str) -> Result<&Item> {
        let item = self
            .results
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| SearchError::ItemNotFound(id.to_string()))?;

        self.selection.open(item);
        self.selection.current().ok_or(SearchError::NoSelection)
    }

    /// Close the detail view; returns whether anything was open
    pub fn close_detail(&mut self) -> bool {
        self.selection.close()
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Items for the current (query, page)
    #[must_use]
    pub fn results(&self) -> &[Item] {
        &self.results
    }

    /// Result count the service reported for the query
    #[must_use]
    pub const fn total_results(&self) -> u64 {
        self.total_results
    }

    /// Current request state
    #[must_use]
    pub const fn request_state(&self) -> &RequestState {
        self.orchestrator.state()
    }

    /// Error text to display, if the latest fetch failed
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.orchestrator.state().error_message()
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.orchestrator.state().is_loading()
    }

    /// Current page and known total
    #[must_use]
    pub const fn page_state(&self) -> PageState {
        self.pages
    }

    /// Whether "previous" should be enabled
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.pages.has_previous()
    }

    /// Whether "next" should be enabled
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pages.has_next()
    }

    /// Submitted query text (empty before the first search)
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.current()
    }

    /// Item open in the detail view
    #[must_use]
    pub const fn selection(&self) -> Option<&Item> {
        self.selection.current()
    }

    /// Most recently issued fetch ticket
    #[must_use]
    pub const fn latest_request(&self) -> Option<&FetchRequest> {
        self.orchestrator.latest()
    }
}
