//! Search, pagination and selection
//!
//! The state machine behind every imgseek front end:
//!
//! 1. `QueryStore` holds the last submitted (non-blank) query
//! 2. `PageState` tracks the current page against the reported total
//! 3. `FetchOrchestrator` issues fetch tickets and rejects stale completions
//! 4. `Selection` holds the item opened in the detail view
//!
//! `SearchController` owns all four and is the only thing front ends talk
//! to. `FetchWorker` runs tickets in the background for interactive use.

pub mod actions;
pub mod controller;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod pagination;
pub mod query;
pub mod selection;
pub mod worker;

pub use actions::ActionOutcome;
pub use controller::{Resolution, SearchController};
pub use error::SearchError;
pub use models::{Author, ImageUrls, Item, SearchPage};
pub use orchestrator::{FETCH_ERROR_MESSAGE, FetchCompletion, FetchRequest, RequestState};
pub use pagination::PageState;
pub use worker::FetchWorker;
