//! Help overlay widget for displaying the full keybind reference

use super::centered_rect;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SEARCH_KEYS: &[(&str, &str)] = &[
    ("Type", "Edit the search text"),
    ("Enter", "Run the search"),
    ("Ctrl+U", "Clear the search text"),
    ("Tab / ↓", "Move to results"),
];

const RESULT_KEYS: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Move cursor"),
    ("Home/End", "Jump to first/last"),
    ("n / →", "Next page"),
    ("p / ←", "Previous page"),
    ("r", "Retry the last search"),
    ("Enter", "Show image details"),
    ("/ or Tab", "Back to search"),
    ("q / Esc", "Quit"),
];

const IMAGE_KEYS: &[(&str, &str)] = &[
    ("d", "Open full-resolution image"),
    ("y", "Copy image URL"),
    ("o", "Open photographer profile"),
    ("Esc", "Close details"),
];

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section(&self, lines: &mut Vec<Line<'static>>, title: &'static str, keys: &[(&'static str, &'static str)]) {
        lines.push(Line::styled(
            format!("  {title}"),
            self.theme.accent_style().add_modifier(Modifier::UNDERLINED),
        ));
        lines.push(Line::default());
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), self.theme.accent_style()),
                Span::raw(*desc),
            ]));
        }
        lines.push(Line::default());
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        self.section(&mut lines, "Search", SEARCH_KEYS);
        self.section(&mut lines, "Results", RESULT_KEYS);
        self.section(&mut lines, "Image", IMAGE_KEYS);
        lines.push(Line::styled("  Press any key to close", self.theme.muted_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
