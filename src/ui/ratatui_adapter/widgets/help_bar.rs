//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::Focus;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "n")
    pub key: &'static str,
    /// Action description (e.g., "search", "next page")
    pub action: &'static str,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }

    /// Hints for the given focus and detail-view state
    #[must_use]
    pub fn for_context(focus: Focus, details_open: bool) -> Vec<Self> {
        if details_open {
            return vec![
                Self::new("d", "download"),
                Self::new("y", "copy URL"),
                Self::new("o", "profile"),
                Self::new("Esc", "close"),
            ];
        }
        match focus {
            Focus::Search => vec![
                Self::new("Enter", "search"),
                Self::new("Tab", "results"),
                Self::new("Esc", "quit"),
            ],
            Focus::Results => vec![
                Self::new("↑/↓", "move"),
                Self::new("Enter", "details"),
                Self::new("n/p", "page"),
                Self::new("r", "retry"),
                Self::new("/", "search"),
                Self::new("?", "help"),
                Self::new("q", "quit"),
            ],
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.muted_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.accent_style()));
            spans.push(Span::styled(":", self.theme.muted_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
