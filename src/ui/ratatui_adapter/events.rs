//! Event handling for the ratatui TUI
//!
//! Maps keyboard events to browser actions. Key handling only touches the
//! presentational `AppState`; anything that involves the search controller
//! or the system is returned as an `EventResult` for the loop to perform.

use super::state::{AppState, Focus, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Redraw and keep going
    Continue,
    /// Leave the browser
    Quit,
    /// Submit the search bar text
    Submit,
    /// Go to the next page
    NextPage,
    /// Go to the previous page
    PreviousPage,
    /// Re-issue the current request
    Retry,
    /// Open the highlighted result in the detail view
    OpenDetails,
    /// Close the detail view
    CloseDetails,
    /// Open the full-resolution image
    Download,
    /// Copy the image URL
    CopyUrl,
    /// Open the photographer's profile
    OpenProfile,
    /// No action taken
    Ignored,
}

/// Handle a key press
///
/// `details_open` is whether the detail view is currently shown; it takes
/// all keys while visible.
pub fn handle_key(state: &mut AppState, key: KeyEvent, details_open: bool) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    if state.mode == Mode::Help {
        // Any key closes help
        state.mode = Mode::Normal;
        return EventResult::Continue;
    }

    if details_open {
        return handle_details(key);
    }

    match state.focus {
        Focus::Search => handle_search(state, key),
        Focus::Results => handle_results(state, key),
    }
}

fn handle_details(key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => EventResult::CloseDetails,
        KeyCode::Char('d') => EventResult::Download,
        KeyCode::Char('y') => EventResult::CopyUrl,
        KeyCode::Char('o') => EventResult::OpenProfile,
        _ => EventResult::Ignored,
    }
}

fn handle_search(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            state.focus = Focus::Results;
            EventResult::Submit
        }
        (KeyCode::Esc, _) => EventResult::Quit,
        (KeyCode::Tab | KeyCode::Down, _) => {
            state.toggle_focus();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.input_clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.input_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.input_backspace();
            EventResult::Continue
        }
        (KeyCode::Delete, _) => {
            state.input_delete();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.input_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.input_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.input_cursor = 0;
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.input_cursor = state.input.len();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_results(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Tab | KeyCode::Char('/') => {
            state.toggle_focus();
            EventResult::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor_up();
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.cursor_down();
            EventResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.jump_to_start();
            EventResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.jump_to_end();
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char('n') => EventResult::NextPage,
        KeyCode::Left | KeyCode::Char('p') => EventResult::PreviousPage,
        KeyCode::Char('r') => EventResult::Retry,
        KeyCode::Enter => EventResult::OpenDetails,
        KeyCode::Char('d') => EventResult::Download,
        KeyCode::Char('y') => EventResult::CopyUrl,
        KeyCode::Char('o') => EventResult::OpenProfile,
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for an event and handle it
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut AppState,
    details_open: bool,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key(state, key, details_open)
        }
        Event::Mouse(mouse) if !details_open => match mouse.kind {
            MouseEventKind::ScrollUp => {
                state.cursor_up();
                EventResult::Continue
            }
            MouseEventKind::ScrollDown => {
                state.cursor_down();
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        },
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn results_state(count: usize) -> AppState {
        let mut state = AppState::default();
        state.focus = Focus::Results;
        state.reset_results(count);
        state
    }

    #[test]
    fn test_typing_and_submit() {
        let mut state = AppState::default();
        for c in "fox".chars() {
            assert_eq!(handle_key(&mut state, key(KeyCode::Char(c)), false), EventResult::Continue);
        }
        assert_eq!(state.input, "fox");

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter), false), EventResult::Submit);
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn test_letters_type_while_searching() {
        let mut state = AppState::default();
        // Result-list shortcuts must not fire while the search bar has focus
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('n')), false), EventResult::Continue);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q')), false), EventResult::Continue);
        assert_eq!(state.input, "nq");
    }

    #[test]
    fn test_result_navigation() {
        let mut state = results_state(5);
        handle_key(&mut state, key(KeyCode::Down), false);
        handle_key(&mut state, key(KeyCode::Char('j')), false);
        assert_eq!(state.cursor, 2);
        handle_key(&mut state, key(KeyCode::Up), false);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_page_keys() {
        let mut state = results_state(5);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('n')), false), EventResult::NextPage);
        assert_eq!(handle_key(&mut state, key(KeyCode::Right), false), EventResult::NextPage);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('p')), false), EventResult::PreviousPage);
        assert_eq!(handle_key(&mut state, key(KeyCode::Left), false), EventResult::PreviousPage);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r')), false), EventResult::Retry);
    }

    #[test]
    fn test_details_keys() {
        let mut state = results_state(5);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter), false), EventResult::OpenDetails);

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('d')), true), EventResult::Download);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('y')), true), EventResult::CopyUrl);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('o')), true), EventResult::OpenProfile);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc), true), EventResult::CloseDetails);
        // Navigation is blocked while the detail view is up
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('n')), true), EventResult::Ignored);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_focus_switching() {
        let mut state = results_state(1);
        handle_key(&mut state, key(KeyCode::Char('/')), false);
        assert_eq!(state.focus, Focus::Search);
        handle_key(&mut state, key(KeyCode::Tab), false);
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let mut state = results_state(1);
        handle_key(&mut state, key(KeyCode::Char('?')), false);
        assert_eq!(state.mode, Mode::Help);

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('n')), false), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc), false), EventResult::Quit);

        let mut state = results_state(1);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q')), false), EventResult::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c, true), EventResult::Quit);
    }
}
