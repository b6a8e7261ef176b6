//! Details modal widget for displaying one image

use super::centered_rect;
use crate::output::detail_fields;
use crate::search::Item;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Details modal widget that displays image information
pub struct DetailsModal<'a> {
    /// Image to describe
    item: &'a Item,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub const fn new(item: &'a Item, theme: &'a Theme) -> Self {
        Self { item, theme }
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (label, value) in detail_fields(self.item) {
            // The title is the modal heading
            if label == "Title" {
                continue;
            }
            let value_style = match label {
                "Portfolio" | "Image" => self.theme.link_style(),
                "Likes" => self.theme.likes_style(),
                "Photographer" => self.theme.author_style(),
                _ => self.theme.normal_style(),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<14}"), self.theme.muted_style()),
                Span::styled(value, value_style),
            ]));
            if label == "Description" {
                lines.push(Line::default());
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("d", self.theme.accent_style()),
            Span::styled(" download  ", self.theme.muted_style()),
            Span::styled("y", self.theme.accent_style()),
            Span::styled(" copy URL  ", self.theme.muted_style()),
            Span::styled("o", self.theme.accent_style()),
            Span::styled(" profile  ", self.theme.muted_style()),
            Span::styled("Esc", self.theme.accent_style()),
            Span::styled(" close", self.theme.muted_style()),
        ]));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(80, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(Span::styled(
                format!(" {} ", self.item.title()),
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let paragraph = Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false });
        paragraph.render(popup_area, buf);
    }
}
