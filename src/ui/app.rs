use std::mem;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::catalog;
use crate::models::{Book, HighlightColor, Testament};
use crate::session::{PointerTarget, ReadingSession, SaveStatus, ShareStatus};

use super::forms::TextInput;
use super::helpers::{anchored_rect, centered_rect, highlight_style, Palette};
use super::reading::{layout_chapter, reference_style, verse_spacing, ChapterDecor};
use super::screens::{ListPicker, ReadingView};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows moved by PageUp / PageDown in the reading pane.
const PAGE_VERSES: isize = 10;
const MENU_WIDTH: u16 = 24;
const MENU_HEIGHT: u16 = 9;

/// Which panel the session is showing. Derived from session state on every
/// call so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Closed,
    Cover,
    Discovery,
    FocusedVerse,
    Reading,
}

/// Fine-grained modes scoped to the reading screen.
enum Mode {
    Normal,
    PickingBook(ListPicker<&'static Book>),
    PickingChapter(ListPicker<u32>),
    PickingVerse(ListPicker<u32>),
    EditingNotes(TextInput),
    ContextMenu,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Terminal front-end over a [`ReadingSession`].
pub struct App {
    session: ReadingSession,
    mode: Mode,
    theme_input: TextInput,
    reading: ReadingView,
    shown_chapter: Option<(&'static str, u32)>,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(session: ReadingSession) -> Self {
        Self {
            session,
            mode: Mode::Normal,
            theme_input: TextInput::single_line(),
            reading: ReadingView::default(),
            shown_chapter: None,
            status: None,
        }
    }

    pub fn session(&self) -> &ReadingSession {
        &self.session
    }

    fn screen(&self) -> Screen {
        let session = &self.session;
        if session.is_app_closed() {
            Screen::Closed
        } else if session.is_cover_visible() {
            Screen::Cover
        } else if session.is_focused_verse_visible() {
            Screen::FocusedVerse
        } else if session.is_discovery_visible() || session.is_discover_loading() {
            Screen::Discovery
        } else {
            Screen::Reading
        }
    }

    /// Advance the session clock and pull session-driven changes into the
    /// view state.
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);

        let current = self
            .session
            .selected_book()
            .map(|book| book.name)
            .zip(self.session.selected_chapter());
        if current != self.shown_chapter {
            self.shown_chapter = current;
            self.reading.reset();
            if matches!(self.mode, Mode::EditingNotes(_)) {
                self.mode = Mode::Normal;
            }
        }

        if let Some(verse) = self.session.take_scroll_request() {
            self.reading.pending_jump = Some(verse);
        }

        if matches!(self.mode, Mode::ContextMenu) && !self.session.context_menu().visible {
            self.mode = Mode::Normal;
        }
        if self.screen() != Screen::Reading && !matches!(self.mode, Mode::Normal) {
            self.mode = Mode::Normal;
        }
    }

    /// Persist edits still waiting on a debounce before the terminal closes.
    pub fn shutdown(&mut self, now: Instant) {
        self.session.flush_pending(now);
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        if self.session.notice().is_some() {
            self.session.dismiss_notice();
            return Ok(false);
        }

        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::PickingBook(picker) => self.handle_pick_book(code, picker),
            Mode::PickingChapter(picker) => self.handle_pick_chapter(code, picker),
            Mode::PickingVerse(picker) => self.handle_pick_verse(code, picker),
            Mode::EditingNotes(input) => self.handle_edit_notes(code, input),
            Mode::ContextMenu => self.handle_context_menu(code),
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen() {
            Screen::Closed => match code {
                KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                KeyCode::Enter | KeyCode::Char('o') => self.session.return_to_cover(),
                _ => {}
            },
            Screen::Cover => match code {
                KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                KeyCode::Enter | KeyCode::Char('o') => {
                    self.clear_status();
                    self.session.open_app_to_default();
                }
                KeyCode::Char('r') => {
                    if !self.session.resume_reading() {
                        self.set_status("No reading position saved yet.", StatusKind::Error);
                    }
                }
                KeyCode::Char('d') => {
                    self.clear_status();
                    self.theme_input.clear();
                    self.session.show_discovery();
                }
                KeyCode::Char('t') => self.session.toggle_theme(),
                _ => {}
            },
            Screen::Discovery => self.handle_discovery_key(code),
            Screen::FocusedVerse => match code {
                KeyCode::Char('a') | KeyCode::Char('n') => self.session.find_another_verse(),
                KeyCode::Char('s') => self.session.share_focused_verse(Instant::now()),
                KeyCode::Esc | KeyCode::Backspace => {
                    self.theme_input.clear();
                    self.session.return_to_discovery();
                }
                KeyCode::Char('q') => self.session.close_app(),
                _ => {}
            },
            Screen::Reading => return Ok(self.handle_reading_key(code)),
        }
        Ok(Mode::Normal)
    }

    fn handle_discovery_key(&mut self, code: KeyCode) {
        if self.session.is_discover_loading() {
            if code == KeyCode::Esc {
                self.session.return_to_cover();
            }
            return;
        }

        match code {
            KeyCode::Esc => {
                self.theme_input.clear();
                self.session.return_to_cover();
            }
            KeyCode::Enter => {
                let theme = self.theme_input.value.trim().to_string();
                if theme.is_empty() {
                    self.set_status("Enter a theme to search for.", StatusKind::Error);
                } else {
                    self.clear_status();
                    self.session.discover_theme(&theme);
                }
            }
            KeyCode::Backspace => {
                self.theme_input.backspace();
            }
            KeyCode::Char(ch) => {
                self.theme_input.push_char(ch);
            }
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, code: KeyCode) -> Mode {
        let now = Instant::now();
        match code {
            KeyCode::Char('q') => self.session.close_app(),
            KeyCode::Esc => self.session.return_to_cover(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, now),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, now),
            KeyCode::PageUp => self.move_cursor(-PAGE_VERSES, now),
            KeyCode::PageDown => self.move_cursor(PAGE_VERSES, now),
            KeyCode::Home => self.move_cursor(isize::MIN / 2, now),
            KeyCode::End => self.move_cursor(isize::MAX / 2, now),
            KeyCode::Char('b') => {
                let books: Vec<&'static Book> = catalog::old_testament()
                    .chain(catalog::new_testament())
                    .collect();
                let current = self.session.selected_book();
                return Mode::PickingBook(ListPicker::new("Book", books, current.as_ref()));
            }
            KeyCode::Char('c') => {
                let chapters = self.session.chapters_for_selected_book();
                if chapters.is_empty() {
                    self.set_status("Select a book first.", StatusKind::Error);
                } else {
                    let current = self.session.selected_chapter();
                    return Mode::PickingChapter(ListPicker::new(
                        "Chapter",
                        chapters,
                        current.as_ref(),
                    ));
                }
            }
            KeyCode::Char('v') => {
                let verses = self.session.verses_for_selected_chapter();
                if verses.is_empty() {
                    self.set_status("No chapter loaded.", StatusKind::Error);
                } else {
                    return Mode::PickingVerse(ListPicker::new(
                        "Verse",
                        verses,
                        self.reading.cursor.as_ref(),
                    ));
                }
            }
            KeyCode::Enter | KeyCode::Char('m') => {
                if let Some(verse) = self.reading.cursor {
                    let y = self.reading.screen_row(verse).unwrap_or(self.reading.area.y);
                    let x = self.reading.area.x + 6;
                    self.session.open_context_menu(verse, x, y + 1);
                    if self.session.context_menu().visible {
                        return Mode::ContextMenu;
                    }
                }
            }
            KeyCode::Char('n') => {
                if self.session.notes_key().is_some() {
                    return Mode::EditingNotes(TextInput::multiline(self.session.notes()));
                }
            }
            KeyCode::Char('s') => {
                if let Some(verse) = self.reading.cursor {
                    self.session.share_verse_from_reading(verse, now);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.session.increase_font_size(),
            KeyCode::Char('-') => self.session.decrease_font_size(),
            KeyCode::Char('t') => self.session.toggle_theme(),
            KeyCode::Char('g') => {
                self.set_status("Generating chapter title...", StatusKind::Info);
                self.session.request_chapter_title();
            }
            _ => {}
        }
        Mode::Normal
    }

    fn move_cursor(&mut self, offset: isize, now: Instant) {
        let before = self.reading.scroll;
        self.reading.move_cursor(offset);
        if self.reading.scroll != before {
            self.session.on_scroll(self.reading.viewport(), now);
        }
    }

    fn handle_pick_book(&mut self, code: KeyCode, mut picker: ListPicker<&'static Book>) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => {
                if let Some(book) = picker.current() {
                    debug!(book = book.name, "book picked");
                    self.session.select_book(book.name);
                }
                return Mode::Normal;
            }
            other => move_picker(&mut picker, other),
        }
        Mode::PickingBook(picker)
    }

    fn handle_pick_chapter(&mut self, code: KeyCode, mut picker: ListPicker<u32>) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => {
                if let Some(chapter) = picker.current() {
                    self.session.select_chapter(*chapter, None);
                }
                return Mode::Normal;
            }
            other => move_picker(&mut picker, other),
        }
        Mode::PickingChapter(picker)
    }

    fn handle_pick_verse(&mut self, code: KeyCode, mut picker: ListPicker<u32>) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => {
                if let Some(verse) = picker.current() {
                    self.session.jump_to_verse(*verse, Instant::now());
                }
                return Mode::Normal;
            }
            other => move_picker(&mut picker, other),
        }
        Mode::PickingVerse(picker)
    }

    fn handle_edit_notes(&mut self, code: KeyCode, mut input: TextInput) -> Mode {
        let changed = match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => input.newline(),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Char(ch) => input.push_char(ch),
            _ => false,
        };
        if changed {
            self.session.edit_notes(input.value.clone(), Instant::now());
        }
        Mode::EditingNotes(input)
    }

    fn handle_context_menu(&mut self, code: KeyCode) -> Mode {
        match code {
            KeyCode::Char(digit @ '1'..='4') => {
                let idx = digit as usize - '1' as usize;
                self.session.pointer_pressed(PointerTarget::Menu);
                self.session.set_highlight(HighlightColor::ALL[idx]);
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                self.session.pointer_pressed(PointerTarget::Menu);
                self.session.remove_highlight();
            }
            KeyCode::Char('s') => {
                if let Some(verse) = self.session.context_menu().target() {
                    self.session.share_verse_from_reading(verse, Instant::now());
                }
                self.session.hide_context_menu();
            }
            KeyCode::Enter | KeyCode::Char('m') => {
                if let Some(verse) = self.session.context_menu().target() {
                    let menu = self.session.context_menu();
                    let (x, y) = (menu.x, menu.y);
                    self.session.open_context_menu(verse, x, y);
                }
            }
            KeyCode::Esc => self.session.hide_context_menu(),
            _ => self.session.pointer_pressed(PointerTarget::Elsewhere),
        }

        if self.session.context_menu().visible {
            Mode::ContextMenu
        } else {
            Mode::Normal
        }
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let palette = Palette::for_mode(self.session.is_dark_mode());
        frame.render_widget(Block::default().style(palette.base()), area);

        let footer_height = FOOTER_HEIGHT.min(area.height);
        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match self.screen() {
            Screen::Closed => self.draw_closed(frame, content_area, palette),
            Screen::Cover => self.draw_cover(frame, content_area, palette),
            Screen::Discovery => self.draw_discovery(frame, content_area, palette),
            Screen::FocusedVerse => self.draw_focused_verse(frame, content_area, palette),
            Screen::Reading => self.draw_reading(frame, content_area, palette),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area, palette);
        }

        match &self.mode {
            Mode::PickingBook(picker) => {
                let labels = picker
                    .items
                    .iter()
                    .map(|book| {
                        let tag = match book.testament {
                            Testament::Old => "OT",
                            Testament::New => "NT",
                        };
                        format!("{} ({tag})", book.name)
                    })
                    .collect();
                draw_picker(frame, area, &picker.title, labels, picker.selected);
            }
            Mode::PickingChapter(picker) | Mode::PickingVerse(picker) => {
                let labels = picker.items.iter().map(u32::to_string).collect();
                draw_picker(frame, area, &picker.title, labels, picker.selected);
            }
            Mode::ContextMenu => self.draw_context_menu(frame, area, palette),
            Mode::EditingNotes(_) | Mode::Normal => {}
        }

        if let Some(notice) = self.session.notice() {
            draw_notice(frame, area, notice);
        }
    }

    fn draw_cover(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("HOLY BIBLE", palette.accent())),
            Line::from(""),
            Line::from(Span::styled("King James Version", palette.muted())),
            Line::from(""),
        ];
        if let Some(location) = self.session.last_read() {
            lines.push(Line::from(Span::styled(
                format!("Last read: {} {}:{}", location.book, location.chapter, location.verse),
                palette.muted(),
            )));
        }

        let block = Block::default().borders(Borders::ALL).style(palette.base());
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, centered_rect(60, 60, area));
    }

    fn draw_closed(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let lines = vec![
            Line::from(Span::styled("The Bible is closed.", palette.accent())),
            Line::from(""),
            Line::from(Span::styled("Press Enter to open it again.", palette.muted())),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered_rect(60, 30, area));
    }

    fn draw_discovery(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Discover by Theme")
            .borders(Borders::ALL)
            .style(palette.base());
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let loading = self.session.is_discover_loading();
        let mut lines = vec![
            Line::from("What would you like guidance on today?"),
            Line::from(""),
            self.theme_input
                .build_line("Theme", "e.g. hope, forgiveness, courage", !loading),
            Line::from(""),
        ];

        if loading {
            lines.push(Line::from(Span::styled(
                "Searching the scriptures...",
                palette.accent(),
            )));
        } else if let Some(error) = self.session.discover_error() {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        if !loading {
            let prefix = "Theme: ".len() as u16;
            let cursor_x = inner.x + prefix + self.theme_input.value.chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y + 2));
        }
    }

    fn draw_focused_verse(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let Some(verse) = self.session.focused_verse() else {
            return;
        };
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let title = match self.session.discovery_theme() {
            Some(theme) => format!("A verse on \"{theme}\""),
            None => "A verse for you".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(palette.base());

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", verse.text),
                palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(verse.reference.clone(), reference_style(palette))),
        ];
        if self.session.is_discover_loading() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Looking for another verse...",
                palette.accent(),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_reading(&mut self, frame: &mut Frame, area: Rect, palette: Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        self.draw_reading_header(frame, chunks[0], palette);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);
        self.draw_chapter(frame, body[0], palette);
        self.draw_notes(frame, body[1], palette);
    }

    fn draw_reading_header(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let session = &self.session;
        let heading = match (session.selected_book(), session.selected_chapter()) {
            (Some(book), Some(chapter)) => format!("{} {chapter}", book.name),
            (Some(book), None) => book.name.to_string(),
            _ => "Select a book".to_string(),
        };
        let translation = session
            .chapter_content()
            .map(|content| content.translation_name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "King James Version".to_string());
        let theme = if session.is_dark_mode() { "dark" } else { "light" };

        let line = Line::from(vec![
            Span::styled(heading, palette.accent()),
            Span::styled(format!("   {translation}"), palette.muted()),
            Span::styled(
                format!("   Text {}%   Theme {theme}", session.font_size_percentage()),
                palette.muted(),
            ),
        ]);
        let block = Block::default().borders(Borders::BOTTOM).style(palette.base());
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_chapter(&mut self, frame: &mut Frame, area: Rect, palette: Palette) {
        let block = Block::default().borders(Borders::RIGHT).style(palette.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.reading.area = inner;

        if self.session.is_loading() {
            let message = Paragraph::new(Span::styled("Loading chapter...", palette.muted()))
                .alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }
        if let Some(error) = self.session.error() {
            let message = Paragraph::new(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(message, inner);
            return;
        }

        let items = self.session.display_items();
        if items.is_empty() {
            let message = Paragraph::new(Span::styled(
                "Press 'b' to choose a book.",
                palette.muted(),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }

        let decor = ChapterDecor {
            title: self.session.chapter_title(),
            preamble: self.session.preamble(),
            highlights: self.session.highlights(),
            cursor: self.reading.cursor,
            spacing: verse_spacing(self.session.font_size_percentage()),
        };
        let layout = layout_chapter(&items, inner.width, &decor, palette);

        self.reading.verse_rows = layout.verse_rows;
        self.reading.total_rows = layout.lines.len() as u16;
        if self.reading.cursor.is_none() {
            self.reading.cursor = self.reading.verse_rows.first().map(|(verse, _)| *verse);
        }
        if let Some(verse) = self.reading.pending_jump.take() {
            self.reading.jump_to(verse);
            self.session.on_scroll(self.reading.viewport(), Instant::now());
        }

        let paragraph = Paragraph::new(layout.lines).scroll((self.reading.scroll, 0));
        frame.render_widget(paragraph, inner);
    }

    fn draw_notes(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let status = match self.session.save_status() {
            SaveStatus::Idle => "",
            SaveStatus::Saving => " (saving...)",
            SaveStatus::Saved => " (saved)",
        };
        let editing = match &self.mode {
            Mode::EditingNotes(input) => Some(input),
            _ => None,
        };
        let border_style = if editing.is_some() {
            palette.accent()
        } else {
            palette.muted()
        };
        let block = Block::default()
            .title(format!("Notes{status}"))
            .borders(Borders::LEFT)
            .border_style(border_style)
            .style(palette.base());
        let inner = block.inner(area);

        let text = self.session.notes();
        let body = if text.is_empty() && editing.is_none() {
            Paragraph::new(Span::styled("Press 'n' to write notes.", palette.muted()))
        } else {
            Paragraph::new(text.to_string())
        };
        frame.render_widget(body.block(block).wrap(Wrap { trim: false }), area);

        if let Some(input) = editing {
            let (col, row) = input.cursor();
            let x = (inner.x + col).min(inner.right().saturating_sub(1));
            let y = (inner.y + row).min(inner.bottom().saturating_sub(1));
            frame.set_cursor_position((x, y));
        }
    }

    fn draw_context_menu(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let menu = self.session.context_menu();
        let Some(verse) = menu.target() else {
            return;
        };
        let popup_area = anchored_rect(menu.x, menu.y, MENU_WIDTH, MENU_HEIGHT, area);
        frame.render_widget(Clear, popup_area);

        let current = self.session.highlight_for(verse);
        let mut lines: Vec<Line> = HighlightColor::ALL
            .iter()
            .enumerate()
            .map(|(idx, color)| {
                let marker = if current == Some(*color) { "*" } else { " " };
                Line::from(vec![
                    Span::raw(format!("[{}]{marker}", idx + 1)),
                    Span::styled(format!(" {color} "), highlight_style(*color)),
                ])
            })
            .collect();
        lines.push(Line::from("[x] Remove highlight"));
        lines.push(Line::from("[s] Share verse"));
        lines.push(Line::from(Span::styled("[Esc] Close", palette.muted())));

        let block = Block::default()
            .title(format!("Verse {verse}"))
            .borders(Borders::ALL)
            .style(palette.base());
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let block = Block::default().borders(Borders::TOP).style(palette.base());
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if self.session.share_status() == ShareStatus::Copied {
            Line::from(Span::styled("Copied!", StatusKind::Info.style()))
        } else if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys: &[(&str, &str)] = match (&self.mode, self.screen()) {
            (Mode::PickingBook(_) | Mode::PickingChapter(_) | Mode::PickingVerse(_), _) => &[
                ("[↑↓]", " Navigate   "),
                ("[Enter]", " Select   "),
                ("[Esc]", " Cancel"),
            ],
            (Mode::EditingNotes(_), _) => &[("[Esc]", " Done editing")],
            (Mode::ContextMenu, _) => &[
                ("[1-4]", " Highlight   "),
                ("[x]", " Remove   "),
                ("[s]", " Share   "),
                ("[Esc]", " Close"),
            ],
            (Mode::Normal, Screen::Closed) => &[("[Enter]", " Open   "), ("[q]", " Quit")],
            (Mode::Normal, Screen::Cover) => &[
                ("[Enter]", " Open   "),
                ("[r]", " Resume   "),
                ("[d]", " Discover   "),
                ("[t]", " Theme   "),
                ("[q]", " Quit"),
            ],
            (Mode::Normal, Screen::Discovery) => &[("[Enter]", " Search   "), ("[Esc]", " Back")],
            (Mode::Normal, Screen::FocusedVerse) => &[
                ("[a]", " Another verse   "),
                ("[s]", " Share   "),
                ("[Esc]", " New theme"),
            ],
            (Mode::Normal, Screen::Reading) => &[
                ("[↑↓]", " Verse   "),
                ("[b/c/v]", " Book/Chapter/Verse   "),
                ("[Enter]", " Menu   "),
                ("[n]", " Notes   "),
                ("[s]", " Share   "),
                ("[+/-]", " Size   "),
                ("[t]", " Theme   "),
                ("[g]", " Title   "),
                ("[Esc]", " Cover   "),
                ("[q]", " Close"),
            ],
        };

        let spans: Vec<Span<'static>> = keys
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(key.to_string(), key_style),
                    Span::raw(label.to_string()),
                ]
            })
            .collect();
        Line::from(spans)
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

fn move_picker<T: PartialEq>(picker: &mut ListPicker<T>, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => picker.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => picker.move_selection(1),
        KeyCode::PageUp => picker.move_selection(-10),
        KeyCode::PageDown => picker.move_selection(10),
        KeyCode::Home => picker.select_first(),
        KeyCode::End => picker.select_last(),
        _ => {}
    }
}

fn draw_picker(frame: &mut Frame, area: Rect, title: &str, labels: Vec<String>, selected: usize) {
    let popup_area = centered_rect(40, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let items: Vec<ListItem> = labels.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: &str) {
    let popup_area = centered_rect(50, 25, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default().title("Notice").borders(Borders::ALL);
    let lines = vec![
        Line::from(notice.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue.",
            Style::default().fg(Color::Gray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
