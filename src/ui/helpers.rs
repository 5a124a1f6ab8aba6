use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};

use crate::models::HighlightColor;

/// Colors for the light and dark reading themes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) text: Color,
    pub(crate) background: Color,
    pub(crate) accent: Color,
    pub(crate) muted: Color,
}

impl Palette {
    pub(crate) fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                text: Color::Gray,
                background: Color::Black,
                accent: Color::Yellow,
                muted: Color::DarkGray,
            }
        } else {
            Self {
                text: Color::Black,
                background: Color::White,
                accent: Color::Blue,
                muted: Color::Gray,
            }
        }
    }

    pub(crate) fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub(crate) fn accent(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }
}

/// Background used to paint a highlighted verse.
pub(crate) fn highlight_style(color: HighlightColor) -> Style {
    let bg = match color {
        HighlightColor::Yellow => Color::Yellow,
        HighlightColor::Green => Color::Green,
        HighlightColor::Red => Color::Red,
        HighlightColor::Purple => Color::Magenta,
    };
    Style::default().bg(bg).fg(Color::Black)
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// A `width` x `height` popup anchored at (`x`, `y`), shifted back inside
/// `area` when it would overflow.
pub(crate) fn anchored_rect(x: u16, y: u16, width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;
    Rect {
        x: x.clamp(area.x, max_x),
        y: y.clamp(area.y, max_y),
        width,
        height,
    }
}
