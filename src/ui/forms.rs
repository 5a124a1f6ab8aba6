use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Single text field used for the theme prompt and the notes editor.
#[derive(Default, Clone)]
pub(crate) struct TextInput {
    pub(crate) value: String,
    pub(crate) multiline: bool,
}

impl TextInput {
    pub(crate) fn single_line() -> Self {
        Self::default()
    }

    /// Multiline field seeded with existing text.
    pub(crate) fn multiline(value: &str) -> Self {
        Self {
            value: value.to_string(),
            multiline: true,
        }
    }

    /// Append a character, rejecting control characters.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.push(ch);
        true
    }

    pub(crate) fn newline(&mut self) -> bool {
        if !self.multiline {
            return false;
        }
        self.value.push('\n');
        true
    }

    pub(crate) fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
    }

    /// Render the field as `label: value`, greying out a placeholder when
    /// empty.
    pub(crate) fn build_line(&self, label: &str, placeholder: &str, active: bool) -> Line<'static> {
        let display = if self.value.is_empty() {
            placeholder.to_string()
        } else {
            self.value.clone()
        };

        let style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        Line::from(vec![Span::raw(format!("{label}: ")), Span::styled(display, style)])
    }

    /// Lines of a multiline value. An empty value is one empty line.
    pub(crate) fn lines(&self) -> Vec<&str> {
        self.value.split('\n').collect()
    }

    /// Cursor position as (column, row) within the rendered value.
    pub(crate) fn cursor(&self) -> (u16, u16) {
        let lines = self.lines();
        let row = lines.len().saturating_sub(1);
        let col = lines.last().map(|line| line.chars().count()).unwrap_or(0);
        (col as u16, row as u16)
    }
}
