//! Fetch orchestration
//!
//! Issues fetch tickets and decides which completions are allowed to touch
//! controller state. Every issued request gets a sequence number from a
//! monotonically increasing counter; only the completion carrying the latest
//! number is ever accepted. Responses to superseded requests are discarded
//! regardless of the order in which they arrive.
//!
//! ```text
//!            issue(q, p)              accept(latest seq, Ok)
//!   Idle ───────────────▶ Loading ──────────────────────────▶ Success
//!                          │  ▲                                  │
//!   accept(latest, Err)    │  │ issue(..)                        │
//!                          ▼  │                                  │
//!                         Failed ◀───────── issue(..) ───────────┘
//! ```

use crate::api::{ApiError, ImageSearch, SearchRequest};
use crate::search::models::SearchPage;
use tracing::debug;

/// Fixed user-facing message for any failed fetch
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching images. Try again later.";

/// Status of the most recent fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No fetch issued yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The latest fetch succeeded
    Success,
    /// The latest fetch failed; carries the user-facing message
    Failed(String),
}

impl RequestState {
    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error text to display, if the latest fetch failed
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Ticket for one issued fetch
///
/// The caller executes it against an [`ImageSearch`] and hands the result
/// back as a [`FetchCompletion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number; higher means more recent
    pub seq: u64,
    /// Query captured at issue time
    pub query: String,
    /// Page captured at issue time
    pub page: u32,
    /// Page size
    pub per_page: u32,
}

impl FetchRequest {
    /// Parameters to send to the remote service
    #[must_use]
    pub fn to_search_request(&self) -> SearchRequest {
        SearchRequest::new(self.query.clone(), self.page).with_per_page(self.per_page)
    }

    /// Whether this ticket targets the same slice as `(query, page)`
    #[must_use]
    pub fn targets(&self, query: &str, page: u32) -> bool {
        self.page == page && self.query == query
    }
}

/// Result of executing a [`FetchRequest`]
#[derive(Debug)]
pub struct FetchCompletion {
    /// The ticket this result belongs to
    pub request: FetchRequest,
    /// What the service returned
    pub outcome: Result<SearchPage, ApiError>,
}

impl FetchCompletion {
    /// Pair a ticket with its outcome
    #[must_use]
    pub const fn new(request: FetchRequest, outcome: Result<SearchPage, ApiError>) -> Self {
        Self { request, outcome }
    }

    /// Run `request` against `service` on the current thread
    #[must_use]
    pub fn execute(request: FetchRequest, service: &dyn ImageSearch) -> Self {
        let outcome = service.search(&request.to_search_request());
        Self::new(request, outcome)
    }
}

/// Issues fetch tickets and filters stale completions
#[derive(Debug)]
pub struct FetchOrchestrator {
    per_page: u32,
    next_seq: u64,
    latest: Option<FetchRequest>,
    state: RequestState,
}

impl FetchOrchestrator {
    /// Create an orchestrator that requests `per_page` items per page
    #[must_use]
    pub const fn new(per_page: u32) -> Self {
        Self {
            per_page,
            next_seq: 1,
            latest: None,
            state: RequestState::Idle,
        }
    }

    /// Page size used for every request
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Current request state
    #[must_use]
    pub const fn state(&self) -> &RequestState {
        &self.state
    }

    /// The most recently issued ticket, if any
    #[must_use]
    pub const fn latest(&self) -> Option<&FetchRequest> {
        self.latest.as_ref()
    }

    /// Issue a fetch for `(query, page)`
    ///
    /// Returns `None` without changing anything when the query is blank, or
    /// when the identical request is already in flight. Otherwise the state
    /// moves to `Loading` (clearing any previous error) and the new ticket
    /// supersedes all earlier ones.
    pub fn issue(&mut self, query: &str, page: u32) -> Option<FetchRequest> {
        if query.trim().is_empty() {
            debug!("fetch skipped: empty query");
            return None;
        }

        if self.state.is_loading()
            && self.latest.as_ref().is_some_and(|r| r.targets(query, page))
        {
            debug!(query, page, "fetch skipped: identical request in flight");
            return None;
        }

        let request = FetchRequest {
            seq: self.next_seq,
            query: query.to_string(),
            page,
            per_page: self.per_page,
        };
        self.next_seq += 1;
        self.latest = Some(request.clone());
        self.state = RequestState::Loading;

        debug!(seq = request.seq, query, page, "fetch issued");
        Some(request)
    }

    /// Whether `completion` answers the latest outstanding request
    #[must_use]
    pub fn accept(&self, completion: &FetchCompletion) -> bool {
        self.state.is_loading()
            && self
                .latest
                .as_ref()
                .is_some_and(|r| r.seq == completion.request.seq)
    }

    /// Mark the latest request as succeeded
    pub fn mark_success(&mut self) {
        self.state = RequestState::Success;
    }

    /// Mark the latest request as failed with the fixed user-facing message
    pub fn mark_failed(&mut self) {
        self.state = RequestState::Failed(FETCH_ERROR_MESSAGE.to_string());
    }
}

impl Default for FetchOrchestrator {
    fn default() -> Self {
        Self::new(crate::api::DEFAULT_PER_PAGE)
    }
}
