//! Pagination bar widget
//!
//! "Previous" and "Next" are only drawn when the move is possible.

use crate::search::PageState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Page position with previous/next controls
pub struct PaginationBar<'a> {
    pages: PageState,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    /// Create a new pagination bar
    #[must_use]
    pub const fn new(pages: PageState, theme: &'a Theme) -> Self {
        Self { pages, theme }
    }

    fn build_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        if self.pages.has_previous() {
            spans.push(Span::styled("◀ p Previous", self.theme.accent_style()));
            spans.push(Span::raw("   "));
        }

        if self.pages.total_pages() > 0 {
            spans.push(Span::styled(
                format!(
                    "Page {} of {}",
                    self.pages.current_page(),
                    self.pages.total_pages()
                ),
                self.theme.muted_style(),
            ));
        }

        if self.pages.has_next() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("Next n ▶", self.theme.accent_style()));
        }

        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(pages: PageState) -> String {
        let theme = Theme::default();
        PaginationBar::new(pages, &theme)
            .build_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    fn pages(current: u32, total: u32) -> PageState {
        let mut pages = PageState::new();
        pages.set_total_pages(total);
        while pages.current_page() < current {
            pages.next();
        }
        pages
    }

    #[test]
    fn test_first_page_hides_previous() {
        let line = text(pages(1, 5));
        assert!(!line.contains("Previous"));
        assert!(line.contains("Page 1 of 5"));
        assert!(line.contains("Next"));
    }

    #[test]
    fn test_last_page_hides_next() {
        let line = text(pages(5, 5));
        assert!(line.contains("Previous"));
        assert!(!line.contains("Next"));
    }

    #[test]
    fn test_no_results_shows_nothing() {
        assert!(text(PageState::new()).is_empty());
    }
}
