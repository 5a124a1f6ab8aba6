use ratatui::layout::Rect;

use crate::session::{VersePosition, Viewport};

/// Popup list used for the book, chapter, and verse pickers.
pub(crate) struct ListPicker<T> {
    pub(crate) title: String,
    pub(crate) items: Vec<T>,
    pub(crate) selected: usize,
}

impl<T: PartialEq> ListPicker<T> {
    /// Build a picker with `current` preselected when present.
    pub(crate) fn new(title: impl Into<String>, items: Vec<T>, current: Option<&T>) -> Self {
        let selected = current
            .and_then(|current| items.iter().position(|item| item == current))
            .unwrap_or(0);
        Self {
            title: title.into(),
            items,
            selected,
        }
    }

    pub(crate) fn current(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }
}

/// Cursor and scroll state of the reading pane.
#[derive(Debug, Default)]
pub(crate) struct ReadingView {
    /// Verse under the cursor.
    pub(crate) cursor: Option<u32>,
    /// First rendered row shown in the pane.
    pub(crate) scroll: u16,
    /// Inner area of the pane from the last draw.
    pub(crate) area: Rect,
    /// Verse to bring into view once the chapter has been laid out.
    pub(crate) pending_jump: Option<u32>,
    /// Row at which each verse starts, in rendering order.
    pub(crate) verse_rows: Vec<(u32, u16)>,
    pub(crate) total_rows: u16,
}

impl ReadingView {
    pub(crate) fn reset(&mut self) {
        self.cursor = None;
        self.scroll = 0;
        self.pending_jump = None;
        self.verse_rows.clear();
        self.total_rows = 0;
    }

    pub(crate) fn row_of(&self, verse: u32) -> Option<u16> {
        self.verse_rows
            .iter()
            .find(|(candidate, _)| *candidate == verse)
            .map(|(_, row)| *row)
    }

    /// Terminal row of `verse` if it is currently on screen.
    pub(crate) fn screen_row(&self, verse: u32) -> Option<u16> {
        let row = self.row_of(verse)?;
        if row < self.scroll || row >= self.scroll + self.area.height {
            return None;
        }
        Some(self.area.y + row - self.scroll)
    }

    /// Move the cursor `offset` verses, clamped to the chapter.
    pub(crate) fn move_cursor(&mut self, offset: isize) {
        if self.verse_rows.is_empty() {
            return;
        }
        let len = self.verse_rows.len() as isize;
        let current = self
            .cursor
            .and_then(|verse| self.verse_rows.iter().position(|(v, _)| *v == verse))
            .unwrap_or(0) as isize;
        let next = (current + offset).clamp(0, len - 1) as usize;
        self.cursor = Some(self.verse_rows[next].0);
        self.keep_cursor_visible();
    }

    /// Put `verse` under the cursor and at the top of the pane.
    pub(crate) fn jump_to(&mut self, verse: u32) {
        if let Some(row) = self.row_of(verse) {
            self.cursor = Some(verse);
            self.scroll = row.min(self.max_scroll());
        }
    }

    pub(crate) fn scroll_by(&mut self, rows: i32) {
        let next = (self.scroll as i32 + rows).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }

    fn max_scroll(&self) -> u16 {
        self.total_rows.saturating_sub(1)
    }

    fn keep_cursor_visible(&mut self) {
        let Some(row) = self.cursor.and_then(|verse| self.row_of(verse)) else {
            return;
        };
        if row < self.scroll {
            self.scroll = row;
        } else if self.area.height > 0 && row >= self.scroll + self.area.height {
            self.scroll = row + 1 - self.area.height;
        }
    }

    /// Snapshot handed to the session whenever the pane scrolls.
    pub(crate) fn viewport(&self) -> Viewport {
        Viewport {
            top: self.scroll as i32,
            verses: self
                .verse_rows
                .iter()
                .map(|(verse, row)| VersePosition {
                    verse: *verse,
                    top: *row as i32,
                })
                .collect(),
        }
    }
}
