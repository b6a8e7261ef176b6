//! Ratatui-based image browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           ImageBrowser                      │
//! │  (drives a SearchController)                │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │FetchWorker │ │  Ratatui  │ │ Crossterm │
//! │ (requests) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Key handling only edits `AppState`. Anything touching the controller
//! comes back as an `EventResult` that the browser loop performs.

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::ImageBrowser;
pub use state::{AppState, Focus, Mode};
pub use theme::Theme;
