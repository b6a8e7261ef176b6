//! Colors and styles for the image browser
//!
//! Widgets ask for a style by role (accent, muted, a message level, a piece
//! of photo metadata) and never pick colors themselves.

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Palette for the browser
#[derive(Debug, Clone)]
pub struct Theme {
    /// Keys, the row marker and focused borders
    pub accent: Color,
    /// Labels, hints and placeholders
    pub muted: Color,
    /// Highlighted row as (background, foreground)
    pub highlight: (Color, Color),
    /// Like counters
    pub likes: Color,
    /// Photographer names
    pub author: Color,
    /// URLs
    pub link: Color,
    /// Message colors as (success, warning, error)
    pub levels: (Color, Color, Color),
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminals
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            highlight: (Color::Blue, Color::White),
            likes: Color::LightRed,
            author: Color::Magenta,
            link: Color::LightBlue,
            levels: (Color::Green, Color::Yellow, Color::Red),
        }
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Unstyled text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Row under the cursor in the result list
    #[must_use]
    pub fn selected_style(&self) -> Style {
        let (bg, fg) = self.highlight;
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Pane border, brighter when the pane has focus
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            self.accent_style()
        } else {
            self.muted_style()
        }
    }

    /// Style for a status line of the given level
    #[must_use]
    pub fn level_style(&self, level: MessageLevel) -> Style {
        let (success, warning, error) = self.levels;
        match level {
            MessageLevel::Success => Style::default().fg(success),
            MessageLevel::Warning => Style::default().fg(warning),
            MessageLevel::Error => Style::default().fg(error).add_modifier(Modifier::BOLD),
            MessageLevel::Info => self.accent_style(),
            MessageLevel::Normal => self.normal_style(),
        }
    }

    #[must_use]
    pub fn likes_style(&self) -> Style {
        Style::default().fg(self.likes)
    }

    #[must_use]
    pub fn author_style(&self) -> Style {
        Style::default().fg(self.author)
    }

    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_follows_focus() {
        let theme = Theme::dark();
        assert_eq!(theme.border_style(true).fg, Some(Color::Cyan));
        assert_eq!(theme.border_style(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_error_level_is_bold_red() {
        let style = Theme::default().level_style(MessageLevel::Error);
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
