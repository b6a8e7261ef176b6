//! Ratatui widgets for the image browser
//!
//! Custom widgets for rendering the browser interface.

mod details_modal;
mod help_bar;
mod help_overlay;
mod image_list;
mod pagination_bar;
mod search_bar;
mod status_bar;

pub use details_modal::DetailsModal;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use image_list::{ImageList, ListContent};
pub use pagination_bar::PaginationBar;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Area of `width_percent` × `height_percent` centered in `area`
pub(crate) fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let width = width_percent.min(90);
    let height = height_percent.min(90);

    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height) / 2),
        Constraint::Percentage(height),
        Constraint::Percentage((100 - height) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width) / 2),
        Constraint::Percentage(width),
        Constraint::Percentage((100 - width) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 50, area);
        assert!(popup.width <= 60);
        assert!(popup.height <= 25);
        assert!(popup.x >= 19 && popup.x <= 21);
        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());
    }
}
