//! Application state for the ratatui TUI
//!
//! Purely presentational state: the text being edited, which pane has
//! focus, the highlighted row and transient status messages. Search state
//! lives in `SearchController`.

use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Which pane receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing into the search bar
    #[default]
    Search,
    /// Moving through the result list
    Results,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the browser
#[derive(Debug)]
pub struct AppState {
    /// Text in the search bar (not yet submitted)
    pub input: String,
    /// Byte offset of the cursor within `input`
    pub input_cursor: usize,
    /// Pane with keyboard focus
    pub focus: Focus,
    /// Current UI mode
    pub mode: Mode,
    /// Highlighted row in the result list
    pub cursor: usize,
    /// First visible row of the result list
    pub scroll_offset: usize,
    /// Height of the visible result area (set during render)
    pub visible_height: usize,
    /// Number of rows in the result list
    pub item_count: usize,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("")
    }
}

impl AppState {
    /// Create state with `input` pre-filled in the search bar
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            input_cursor: input.len(),
            focus: Focus::Search,
            mode: Mode::Normal,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // Updated during render
            item_count: 0,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.item_count {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Jump to first row
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last row
    pub const fn jump_to_end(&mut self) {
        self.cursor = self.item_count.saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside the viewport
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// The result list was replaced with `count` new rows
    pub const fn reset_results(&mut self, count: usize) {
        self.item_count = count;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Switch focus between the search bar and the result list
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Search,
        };
    }

    /// Insert a character at the cursor
    pub fn input_push(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn input_backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.input.remove(prev);
            self.input_cursor = prev;
        }
    }

    /// Delete the character under the cursor
    pub fn input_delete(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input.remove(self.input_cursor);
        }
    }

    /// Move the text cursor left
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the text cursor right
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input_cursor = self.input[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.input.len(), |(i, _)| self.input_cursor + i);
        }
    }

    /// Clear the search bar
    pub fn input_clear(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_prefills_input() {
        let state = AppState::new("mountain");
        assert_eq!(state.input, "mountain");
        assert_eq!(state.input_cursor, 8);
        assert_eq!(state.focus, Focus::Search);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_cursor_bounded_by_item_count() {
        let mut state = AppState::default();
        state.reset_results(3);

        state.cursor_up();
        assert_eq!(state.cursor, 0);

        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 2);

        state.jump_to_start();
        assert_eq!(state.cursor, 0);
        state.jump_to_end();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let mut state = AppState::default();
        state.cursor_down();
        state.jump_to_end();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = AppState::default();
        state.visible_height = 3;
        state.reset_results(10);

        for _ in 0..5 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, 5);
        assert_eq!(state.scroll_offset, 3);

        state.jump_to_start();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_reset_results_moves_cursor_home() {
        let mut state = AppState::default();
        state.reset_results(10);
        state.jump_to_end();
        state.reset_results(4);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.item_count, 4);
    }

    #[test]
    fn test_input_editing_handles_multibyte() {
        let mut state = AppState::default();
        state.input_push('c');
        state.input_push('é');
        state.input_push('x');
        assert_eq!(state.input, "céx");

        state.input_cursor_left();
        state.input_backspace();
        assert_eq!(state.input, "cx");
        assert_eq!(state.input_cursor, 1);

        state.input_delete();
        assert_eq!(state.input, "c");

        state.input_cursor_left();
        state.input_cursor_right();
        assert_eq!(state.input_cursor, 1);

        state.input_clear();
        assert!(state.input.is_empty());
        assert_eq!(state.input_cursor, 0);
    }

    #[test]
    fn test_toggle_focus() {
        let mut state = AppState::default();
        state.toggle_focus();
        assert_eq!(state.focus, Focus::Results);
        state.toggle_focus();
        assert_eq!(state.focus, Focus::Search);
    }

    #[test]
    fn test_messages_expire() {
        let mut state = AppState::default();
        state.message_ttl = Duration::from_millis(20);
        state.add_message(MessageLevel::Success, "Copied");
        assert_eq!(state.active_messages().len(), 1);

        std::thread::sleep(Duration::from_millis(50));
        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }
}
