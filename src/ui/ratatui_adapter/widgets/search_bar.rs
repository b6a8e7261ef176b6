//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Text being edited
    input: &'a str,
    /// Cursor position in the text
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(input: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            input,
            cursor,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = self.theme.border_style(self.focused);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search photos ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("🔍 ", self.theme.muted_style())];

        if self.input.is_empty() && !self.focused {
            spans.push(Span::styled(
                "press / to search",
                self.theme.muted_style(),
            ));
        } else if self.focused {
            let cursor = self.cursor.min(self.input.len());
            let (before, after) = self.input.split_at(cursor);
            spans.push(Span::raw(before));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.input));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
