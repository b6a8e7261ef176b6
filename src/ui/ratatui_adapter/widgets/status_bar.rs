//! Status bar widget for displaying messages
//!
//! A fetch error takes priority over transient action messages.

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the error line or the latest message
pub struct StatusBar<'a> {
    /// Fetch error text, if the latest fetch failed
    error: Option<&'a str>,
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self {
            error: None,
            messages,
            theme,
        }
    }

    /// Show a fetch error
    #[must_use]
    pub const fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    fn build_line(&self) -> Line<'a> {
        if let Some(error) = self.error {
            let style = self.theme.level_style(MessageLevel::Error);
            return Line::from(vec![
                Span::styled("✗ ", style),
                Span::styled(error, style),
                Span::styled("  (r to retry)", self.theme.muted_style()),
            ]);
        }

        self.messages.last().map_or_else(Line::default, |msg| {
            let style = self.theme.level_style(msg.level);
            Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ])
        })
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.build_line()).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FETCH_ERROR_MESSAGE;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_error_takes_priority() {
        let theme = Theme::default();
        let msg = StatusMessage::new(MessageLevel::Success, "Copied".to_string());
        let messages = [&msg];
        let bar = StatusBar::new(&messages, &theme).with_error(Some(FETCH_ERROR_MESSAGE));

        let line = text(&bar.build_line());
        assert!(line.contains(FETCH_ERROR_MESSAGE));
        assert!(!line.contains("Copied"));
    }

    #[test]
    fn test_latest_message_shown() {
        let theme = Theme::default();
        let first = StatusMessage::new(MessageLevel::Info, "first".to_string());
        let second = StatusMessage::new(MessageLevel::Error, "second".to_string());
        let messages = [&first, &second];
        let bar = StatusBar::new(&messages, &theme);

        assert_eq!(text(&bar.build_line()), "✗ second");
    }

    #[test]
    fn test_empty_status() {
        let theme = Theme::default();
        let bar = StatusBar::new(&[], &theme);
        assert!(text(&bar.build_line()).is_empty());
    }
}
