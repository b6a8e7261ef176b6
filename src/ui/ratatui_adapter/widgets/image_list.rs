//! Result list widget
//!
//! Shows the current page of results, or a placeholder while a fetch is in
//! flight or before the first search.

use crate::search::Item;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// What the list area should show
#[derive(Debug, Clone, Copy)]
pub enum ListContent<'a> {
    /// Nothing searched yet
    Idle,
    /// A fetch is in flight; results are hidden
    Loading,
    /// Results for the current page (possibly empty)
    Items(&'a [Item]),
}

/// Result list widget with a cursor indicator
pub struct ImageList<'a> {
    content: ListContent<'a>,
    cursor: usize,
    scroll_offset: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ImageList<'a> {
    /// Create a new list widget
    #[must_use]
    pub const fn new(content: ListContent<'a>, theme: &'a Theme) -> Self {
        Self {
            content,
            cursor: 0,
            scroll_offset: 0,
            theme,
            focused: false,
        }
    }

    /// Set the highlighted row and first visible row
    #[must_use]
    pub const fn cursor(mut self, cursor: usize, scroll_offset: usize) -> Self {
        self.cursor = cursor;
        self.scroll_offset = scroll_offset;
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_item(&self, item: &'a Item, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor && self.focused { ">" } else { " " };
        let title_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.accent_style()),
            Span::raw(" "),
            Span::styled(item.title(), title_style),
            Span::raw("  "),
            Span::styled(format!("♥ {}", item.likes), self.theme.likes_style()),
            Span::styled("  by ", self.theme.muted_style()),
            Span::styled(item.author.name.as_str(), self.theme.author_style()),
        ]);

        ListItem::new(line)
    }

    fn placeholder(&self, text: &'a str, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(text, self.theme.muted_style()))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for ImageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.content {
            ListContent::Items(items) => format!(" Results ({}) ", items.len()),
            _ => " Results ".to_string(),
        };
        let border_style = self.theme.border_style(self.focused);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        match self.content {
            ListContent::Idle => self.placeholder("Type a search and press Enter", inner, buf),
            ListContent::Loading => self.placeholder("Loading...", inner, buf),
            ListContent::Items([]) => self.placeholder("No images found", inner, buf),
            ListContent::Items(items) => {
                let visible_height = inner.height as usize;
                let start = self.scroll_offset.min(items.len());
                let end = (start + visible_height).min(items.len());

                let rows: Vec<ListItem> = items[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, item)| self.render_item(item, start + offset == self.cursor))
                    .collect();

                List::new(rows).render(inner, buf);
            }
        }
    }
}
