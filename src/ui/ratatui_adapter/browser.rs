//! Interactive image browser
//!
//! Drives a `SearchController` from keyboard input. Fetches run on a
//! `FetchWorker` so the screen keeps redrawing (and the "Loading..."
//! placeholder stays visible) while requests are in flight.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Focus, Mode};
use super::theme::Theme;
use super::widgets::{
    DetailsModal, HelpBar, HelpOverlay, ImageList, KeyHint, ListContent, PaginationBar, SearchBar,
    StatusBar,
};
use crate::api::ImageSearch;
use crate::search::actions::{self, ActionOutcome};
use crate::search::{
    FetchRequest, FetchWorker, Item, RequestState, Resolution, SearchController,
};
use crate::ui::error::Result;
use crate::ui::output::MessageLevel;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// How long to wait for input before checking the worker again
const TICK: Duration = Duration::from_millis(50);

/// Ratatui front end for image search
pub struct ImageBrowser {
    controller: SearchController,
    worker: FetchWorker,
    state: AppState,
    theme: Theme,
}

impl ImageBrowser {
    /// Create a browser backed by `service`
    ///
    /// If `initial_query` is given it is placed in the search bar and
    /// submitted as soon as the browser starts.
    #[must_use]
    pub fn new(service: Arc<dyn ImageSearch>, initial_query: Option<&str>) -> Self {
        Self {
            controller: SearchController::new(),
            worker: FetchWorker::new(service),
            state: AppState::new(initial_query.unwrap_or_default()),
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up or drawn to.
    pub fn run(mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            warn!(error = %e, "terminal cleanup failed");
        }

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        if !self.state.input.trim().is_empty() {
            self.handle(EventResult::Submit);
        }

        while !self.state.should_exit {
            self.drain_completions();
            self.state.cleanup_messages();

            terminal.draw(|frame| self.render(frame))?;

            let details_open = self.controller.selection().is_some();
            let event = poll_and_handle(&mut self.state, details_open, TICK)?;
            self.handle(event);
        }

        Ok(())
    }

    /// Apply every completion the worker has ready
    fn drain_completions(&mut self) {
        while let Some(completion) = self.worker.try_recv() {
            self.apply(completion);
        }
    }

    /// Wait up to `timeout` for one completion, then drain the rest
    #[cfg(test)]
    fn pump(&mut self, timeout: Duration) -> Result<()> {
        if let Some(completion) = self.worker.recv_timeout(timeout)? {
            self.apply(completion);
        }
        self.drain_completions();
        Ok(())
    }

    fn apply(&mut self, completion: crate::search::FetchCompletion) {
        if let Resolution::Loaded { items, .. } = self.controller.complete(completion) {
            self.state.reset_results(items);
        }
    }

    /// Hand a fetch ticket to the worker
    fn dispatch(&mut self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            return;
        };
        if let Err(e) = self.worker.spawn(request) {
            warn!(error = %e, "could not start fetch");
            self.state.add_message(MessageLevel::Error, e.to_string());
        }
    }

    /// Perform the action an event asked for
    fn handle(&mut self, event: EventResult) {
        match event {
            EventResult::Quit => self.state.should_exit = true,
            EventResult::Submit => {
                let request = self.controller.submit_query(&self.state.input);
                if request.is_none() && self.controller.query().is_empty() {
                    self.state.focus = Focus::Search;
                }
                self.dispatch(request);
            }
            EventResult::NextPage => {
                let request = self.controller.go_to_next_page();
                self.dispatch(request);
            }
            EventResult::PreviousPage => {
                let request = self.controller.go_to_previous_page();
                self.dispatch(request);
            }
            EventResult::Retry => {
                let request = self.controller.retry();
                self.dispatch(request);
            }
            EventResult::OpenDetails => {
                let Some(id) = self.highlighted().map(|item| item.id.clone()) else {
                    return;
                };
                if let Err(e) = self.controller.select_item(&id) {
                    self.state.add_message(MessageLevel::Error, e.to_string());
                }
            }
            EventResult::CloseDetails => {
                self.controller.close_detail();
            }
            EventResult::Download => self.run_action(actions::open_full_resolution),
            EventResult::OpenProfile => self.run_action(actions::open_author_profile),
            EventResult::CopyUrl => self.run_action(|item| {
                actions::copy_url(item).unwrap_or_else(|e| ActionOutcome::Failed(e.to_string()))
            }),
            EventResult::Continue | EventResult::Ignored => {}
        }
    }

    /// Item an action applies to: the open detail view, else the highlighted row
    fn action_target(&self) -> Option<&Item> {
        self.controller.selection().or_else(|| self.highlighted())
    }

    fn highlighted(&self) -> Option<&Item> {
        if self.controller.is_loading() {
            return None;
        }
        self.controller.results().get(self.state.cursor)
    }

    fn run_action(&mut self, action: impl FnOnce(&Item) -> ActionOutcome) {
        let Some(item) = self.action_target() else {
            return;
        };
        let outcome = action(item);
        debug!(id = %item.id, ?outcome, "item action");
        self.state
            .add_message(MessageLevel::from(&outcome), outcome.message().to_string());
    }

    fn list_content(&self) -> ListContent<'_> {
        match self.controller.request_state() {
            RequestState::Loading => ListContent::Loading,
            RequestState::Idle => ListContent::Idle,
            RequestState::Failed(_) if self.controller.results().is_empty() => ListContent::Idle,
            RequestState::Success | RequestState::Failed(_) => {
                ListContent::Items(self.controller.results())
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(5),    // Results
                Constraint::Length(1), // Pagination
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        self.state.visible_height = layout[1].height.saturating_sub(2) as usize;

        let theme = &self.theme;
        let state = &self.state;
        let details = self.controller.selection();

        let search_bar = SearchBar::new(&state.input, state.input_cursor, theme)
            .focused(state.focus == Focus::Search);
        frame.render_widget(search_bar, layout[0]);

        let list = ImageList::new(self.list_content(), theme)
            .cursor(state.cursor, state.scroll_offset)
            .focused(state.focus == Focus::Results);
        frame.render_widget(list, layout[1]);

        if !self.controller.is_loading() {
            frame.render_widget(
                PaginationBar::new(self.controller.page_state(), theme),
                layout[2],
            );
        }

        let messages = state.active_messages();
        let status = StatusBar::new(&messages, theme).with_error(self.controller.error_message());
        frame.render_widget(status, layout[3]);

        let hints = KeyHint::for_context(state.focus, details.is_some());
        frame.render_widget(HelpBar::new(&hints, theme), layout[4]);

        if let Some(item) = details {
            frame.render_widget(DetailsModal::new(item, theme), frame.area());
        } else if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme), frame.area());
        }
    }
}
