use std::collections::BTreeMap;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::HighlightColor;
use crate::session::DisplayItem;

use super::helpers::{highlight_style, Palette};

const GUTTER: &str = "  ";
const CURSOR_GUTTER: &str = "> ";

/// Rendered chapter plus the row where each verse starts.
pub(crate) struct ReadingLayout {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) verse_rows: Vec<(u32, u16)>,
}

/// Everything besides the verses that the pane shows.
pub(crate) struct ChapterDecor<'a> {
    pub(crate) title: Option<&'a str>,
    pub(crate) preamble: Option<&'a str>,
    pub(crate) highlights: &'a BTreeMap<u32, HighlightColor>,
    pub(crate) cursor: Option<u32>,
    pub(crate) spacing: usize,
}

/// Blank rows between verses for a text-size percentage. The terminal cannot
/// scale glyphs, so larger sizes open the text up instead.
pub(crate) fn verse_spacing(percentage: u32) -> usize {
    match percentage {
        p if p >= 175 => 2,
        p if p >= 125 => 1,
        _ => 0,
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub(crate) fn layout_chapter(
    items: &[DisplayItem<'_>],
    width: u16,
    decor: &ChapterDecor<'_>,
    palette: Palette,
) -> ReadingLayout {
    let width = width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut verse_rows = Vec::new();

    if let Some(title) = decor.title {
        for row in wrap_text(title, width) {
            lines.push(Line::from(Span::styled(row, palette.accent())));
        }
        lines.push(Line::from(""));
    }

    if let Some(preamble) = decor.preamble {
        let style = palette.muted().add_modifier(Modifier::ITALIC);
        for row in wrap_text(preamble, width) {
            lines.push(Line::from(Span::styled(row, style)));
        }
        lines.push(Line::from(""));
    }

    for (idx, item) in items.iter().enumerate() {
        match item {
            DisplayItem::Title(title) => {
                if idx > 0 {
                    lines.push(Line::from(""));
                }
                for row in wrap_text(title, width) {
                    lines.push(Line::from(Span::styled(row, palette.accent())));
                }
            }
            DisplayItem::Verse(verse) => {
                verse_rows.push((verse.verse, lines.len() as u16));

                let number = format!("{:>3} ", verse.verse);
                let indent = GUTTER.len() + number.len();
                let body_width = width.saturating_sub(indent).max(1);
                let selected = decor.cursor == Some(verse.verse);
                let text_style = match decor.highlights.get(&verse.verse) {
                    Some(color) => highlight_style(*color),
                    None => palette.base(),
                };
                let text_style = if selected {
                    text_style.add_modifier(Modifier::BOLD)
                } else {
                    text_style
                };

                for (row_idx, row) in wrap_text(&verse.text, body_width).into_iter().enumerate() {
                    let lead = if row_idx == 0 {
                        let gutter = if selected { CURSOR_GUTTER } else { GUTTER };
                        vec![
                            Span::styled(gutter, palette.accent()),
                            Span::styled(number.clone(), palette.muted()),
                        ]
                    } else {
                        vec![Span::raw(" ".repeat(indent))]
                    };
                    let mut spans = lead;
                    spans.push(Span::styled(row, text_style));
                    lines.push(Line::from(spans));
                }

                for _ in 0..decor.spacing {
                    lines.push(Line::from(""));
                }
            }
        }
    }

    ReadingLayout { lines, verse_rows }
}

/// Reference style applied to the focused verse card.
pub(crate) fn reference_style(palette: Palette) -> Style {
    palette.muted().add_modifier(Modifier::ITALIC)
}
