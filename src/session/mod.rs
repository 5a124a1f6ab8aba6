//! The reading session: every piece of reader state plus the operations that
//! move it around. The session is presentation-agnostic. A front-end calls
//! the operations, calls [`ReadingSession::tick`] regularly to apply finished
//! background work and due timers, and reads the accessors to draw.
//!
//! Network work runs on an [`Executor`] and reports back over a channel, so
//! all state is only ever mutated from the thread that owns the session.
//! Chapter loads and theme lookups carry a generation number; a completion
//! that belongs to a superseded request is dropped instead of overwriting
//! newer state.

mod font;
mod menu;
mod scroll;
mod share;
mod tasks;
mod timer;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::catalog;
use crate::db::keys::{highlight_key, notes_key, LAST_READ_KEY, THEME_KEY};
use crate::db::KeyValueStore;
use crate::models::{
    Book, ChapterContent, FocusedVerse, HighlightColor, ReadingLocation, Verse,
};
use crate::services::{ChapterSource, DiscoveryError, ThemeOracle};

pub use font::{FontScale, INITIAL_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use menu::{ContextMenu, PointerTarget};
pub use scroll::{topmost_visible_verse, VersePosition, Viewport};
pub use share::{share_text, SharePayload, SharePlatform};
pub use tasks::{Executor, InlineExecutor, Job, ThreadExecutor};
pub use timer::Timer;

use tasks::Completion;

pub const NOTES_SAVE_DELAY: Duration = Duration::from_millis(1500);
pub const SAVED_STATUS_DURATION: Duration = Duration::from_secs(2);
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(250);
pub const JUMP_DELAY: Duration = Duration::from_millis(100);
pub const COPIED_STATUS_DURATION: Duration = Duration::from_secs(2);

const CHAPTER_LOAD_FAILED: &str = "Could not load the chapter. Please try again.";
const CONNECTIVITY_FAILED: &str =
    "An error occurred while fetching data. Please check your internet connection.";
const DEFAULT_BOOK_MISSING: &str = "Genesis book not found for initial load.";
const CLIPBOARD_FAILED: &str = "Could not copy text to clipboard.";

/// Progress of the debounced notes write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareStatus {
    Idle,
    Copied,
}

/// One row of the reading pane: either a section heading or a verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayItem<'a> {
    Title(&'static str),
    Verse(&'a Verse),
}

/// Collaborators injected into a session.
pub struct SessionServices {
    pub store: Box<dyn KeyValueStore>,
    pub chapters: Arc<dyn ChapterSource>,
    pub oracle: Arc<dyn ThemeOracle>,
    pub executor: Box<dyn Executor>,
    pub share: Box<dyn SharePlatform>,
}

pub struct ReadingSession {
    store: Box<dyn KeyValueStore>,
    chapters: Arc<dyn ChapterSource>,
    oracle: Arc<dyn ThemeOracle>,
    executor: Box<dyn Executor>,
    share: Box<dyn SharePlatform>,
    completions_tx: Sender<Completion>,
    completions_rx: Receiver<Completion>,

    cover_visible: bool,
    discovery_visible: bool,
    focused_verse_visible: bool,
    app_closed: bool,

    discover_loading: bool,
    discover_error: Option<String>,
    focused_verse: Option<FocusedVerse>,
    discovery_theme: Option<String>,
    discovery_generation: u64,

    selected_book: Option<&'static Book>,
    selected_chapter: Option<u32>,
    chapter: Option<ChapterContent>,
    loading: bool,
    error: Option<String>,
    preamble: Option<&'static str>,
    chapter_title: Option<String>,
    chapter_generation: u64,

    notes: String,
    save_status: SaveStatus,
    notes_save: Timer,
    save_status_reset: Timer,

    highlights: BTreeMap<u32, HighlightColor>,
    context_menu: ContextMenu,

    font: FontScale,
    dark_mode: bool,

    last_read: Option<ReadingLocation>,
    pending_viewport: Option<Viewport>,
    scroll_settle: Timer,
    jump_target: Option<u32>,
    jump: Timer,
    scroll_request: Option<u32>,

    share_status: ShareStatus,
    share_status_reset: Timer,
    notice: Option<String>,
}

impl ReadingSession {
    /// Build a session showing the cover. Theme and last-read location are
    /// restored from the store; `prefer_dark` applies when no theme is saved.
    pub fn new(services: SessionServices, prefer_dark: bool) -> Self {
        let (completions_tx, completions_rx) = channel();
        let mut session = Self {
            store: services.store,
            chapters: services.chapters,
            oracle: services.oracle,
            executor: services.executor,
            share: services.share,
            completions_tx,
            completions_rx,
            cover_visible: true,
            discovery_visible: false,
            focused_verse_visible: false,
            app_closed: false,
            discover_loading: false,
            discover_error: None,
            focused_verse: None,
            discovery_theme: None,
            discovery_generation: 0,
            selected_book: None,
            selected_chapter: None,
            chapter: None,
            loading: false,
            error: None,
            preamble: None,
            chapter_title: None,
            chapter_generation: 0,
            notes: String::new(),
            save_status: SaveStatus::Idle,
            notes_save: Timer::default(),
            save_status_reset: Timer::default(),
            highlights: BTreeMap::new(),
            context_menu: ContextMenu::default(),
            font: FontScale::default(),
            dark_mode: prefer_dark,
            last_read: None,
            pending_viewport: None,
            scroll_settle: Timer::default(),
            jump_target: None,
            jump: Timer::default(),
            scroll_request: None,
            share_status: ShareStatus::Idle,
            share_status_reset: Timer::default(),
            notice: None,
        };
        session.restore_last_read();
        session.restore_theme();
        session
    }

    fn restore_last_read(&mut self) {
        let Some(raw) = self.read_key(LAST_READ_KEY) else {
            return;
        };
        match serde_json::from_str::<ReadingLocation>(&raw) {
            Ok(location) => self.last_read = Some(location),
            Err(err) => {
                error!("error parsing last read location: {err}");
                self.remove_key(LAST_READ_KEY);
            }
        }
    }

    fn restore_theme(&mut self) {
        if let Some(theme) = self.read_key(THEME_KEY) {
            self.dark_mode = theme == "dark";
        }
    }

    // ----- screen transitions -------------------------------------------

    pub fn hide_cover(&mut self) {
        self.cover_visible = false;
    }

    pub fn show_discovery(&mut self) {
        self.cover_visible = false;
        self.discovery_visible = true;
        self.discover_error = None;
    }

    /// Look up a verse for `theme`. Blank themes are ignored.
    pub fn discover_theme(&mut self, theme: &str) {
        let theme = theme.trim();
        if theme.is_empty() {
            return;
        }
        self.discovery_theme = Some(theme.to_string());
        self.fetch_verse_for_theme(theme.to_string());
    }

    /// Re-run the current theme for a different verse.
    pub fn find_another_verse(&mut self) {
        if let Some(theme) = self.discovery_theme.clone() {
            self.fetch_verse_for_theme(theme);
        }
    }

    pub fn return_to_discovery(&mut self) {
        self.abandon_discovery();
        self.focused_verse_visible = false;
        self.discovery_visible = true;
        self.focused_verse = None;
        self.discovery_theme = None;
        self.discover_error = None;
    }

    /// Leave the cover for the reading view, loading the first chapter of the
    /// default book unless a chapter is already there.
    pub fn open_app_to_default(&mut self) {
        self.hide_cover();
        if self.chapter.is_some() || self.loading {
            return;
        }
        match catalog::default_book() {
            Some(book) => {
                self.selected_book = Some(book);
                self.select_chapter(1, None);
            }
            None => {
                self.loading = false;
                self.error = Some(DEFAULT_BOOK_MISSING.to_string());
            }
        }
    }

    pub fn close_app(&mut self) {
        self.app_closed = true;
    }

    pub fn return_to_cover(&mut self) {
        self.abandon_discovery();
        self.app_closed = false;
        self.discovery_visible = false;
        self.focused_verse_visible = false;
        self.cover_visible = true;
    }

    // ----- theme discovery ----------------------------------------------

    fn fetch_verse_for_theme(&mut self, theme: String) {
        self.discovery_generation += 1;
        let generation = self.discovery_generation;
        self.discover_loading = true;
        self.discover_error = None;
        if !self.focused_verse_visible {
            self.discovery_visible = false;
        }

        let oracle = Arc::clone(&self.oracle);
        let chapters = Arc::clone(&self.chapters);
        let tx = self.completions_tx.clone();
        let job: Job = Box::new(move || {
            let books = catalog::book_names();
            let outcome = locate_theme_verse(oracle.as_ref(), chapters.as_ref(), &theme, &books);
            if tx.send(Completion::Discovery { generation, outcome }).is_err() {
                debug!("session dropped before discovery finished");
            }
        });

        if let Err(err) = self.executor.spawn("theme-discovery", job) {
            self.apply_discovery(
                generation,
                Err(DiscoveryError::Dispatch {
                    detail: err.to_string(),
                }),
            );
        }
    }

    /// Invalidate any lookup still in flight so its result is dropped.
    fn abandon_discovery(&mut self) {
        if self.discover_loading {
            debug!(generation = self.discovery_generation, "abandoning theme lookup");
        }
        self.discovery_generation += 1;
        self.discover_loading = false;
    }

    fn apply_discovery(&mut self, generation: u64, outcome: Result<FocusedVerse, DiscoveryError>) {
        if generation != self.discovery_generation {
            debug!(generation, current = self.discovery_generation, "dropping stale discovery result");
            return;
        }

        match outcome {
            Ok(focused) => {
                info!(reference = %focused.reference, "theme discovery succeeded");
                self.focused_verse = Some(focused);
                self.focused_verse_visible = true;
            }
            Err(err) => {
                error!("theme discovery failed: {err:?}");
                self.discover_error = Some(err.to_string());
                self.focused_verse_visible = false;
                self.discovery_visible = true;
            }
        }
        self.discover_loading = false;
    }

    // ----- navigation ---------------------------------------------------

    /// Select a book by name and load its first chapter.
    pub fn select_book(&mut self, name: &str) -> bool {
        match catalog::find_book(name) {
            Some(book) => {
                self.selected_book = Some(book);
                self.select_chapter(1, None);
                true
            }
            None => {
                warn!(name, "unknown book selected");
                false
            }
        }
    }

    /// Load `chapter` of the selected book, scrolling to `verse_to_jump` (or
    /// verse 1) once the content arrives. No-op without a selected book.
    pub fn select_chapter(&mut self, chapter: u32, verse_to_jump: Option<u32>) {
        let Some(book) = self.selected_book else {
            return;
        };

        self.notes = self
            .read_key(&notes_key(book.name, chapter))
            .unwrap_or_default();
        self.save_status = SaveStatus::Idle;
        self.notes_save.cancel();
        self.save_status_reset.cancel();

        self.selected_chapter = Some(chapter);
        self.loading = true;
        self.error = None;
        self.chapter = None;
        self.highlights.clear();
        self.context_menu.hide();
        self.chapter_title = None;
        self.preamble = catalog::preamble(book.name, chapter);

        self.chapter_generation += 1;
        let generation = self.chapter_generation;
        let chapters = Arc::clone(&self.chapters);
        let tx = self.completions_tx.clone();
        let job: Job = Box::new(move || {
            let content = chapters.fetch_chapter(book.name, chapter);
            let completion = Completion::Chapter {
                generation,
                book,
                chapter,
                verse_to_jump,
                content,
            };
            if tx.send(completion).is_err() {
                debug!("session dropped before chapter load finished");
            }
        });

        if let Err(err) = self.executor.spawn("chapter-fetch", job) {
            error!(book = book.name, chapter, "failed to dispatch chapter fetch: {err}");
            self.error = Some(CONNECTIVITY_FAILED.to_string());
            self.loading = false;
        }
    }

    fn apply_chapter(
        &mut self,
        now: Instant,
        generation: u64,
        book: &'static Book,
        chapter: u32,
        verse_to_jump: Option<u32>,
        content: Option<ChapterContent>,
    ) {
        if generation != self.chapter_generation {
            debug!(book = book.name, chapter, "dropping stale chapter load");
            return;
        }

        match content {
            Some(content) => {
                let target = verse_to_jump.unwrap_or(1);
                self.jump_to_verse(target, now);
                self.save_last_read(book.name, chapter, target);
                self.highlights = self.load_highlights(book.name, chapter, &content);
                self.chapter = Some(content);
            }
            None => {
                self.error = Some(CHAPTER_LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    fn load_highlights(
        &self,
        book: &str,
        chapter: u32,
        content: &ChapterContent,
    ) -> BTreeMap<u32, HighlightColor> {
        let mut highlights = BTreeMap::new();
        for verse in &content.verses {
            let Some(raw) = self.read_key(&highlight_key(book, chapter, verse.verse)) else {
                continue;
            };
            match raw.parse::<HighlightColor>() {
                Ok(color) => {
                    highlights.insert(verse.verse, color);
                }
                Err(err) => warn!(book, chapter, verse = verse.verse, "ignoring highlight: {err}"),
            }
        }
        highlights
    }

    /// Reopen the last-read location, if one was saved.
    pub fn resume_reading(&mut self) -> bool {
        let Some(location) = self.last_read.clone() else {
            return false;
        };
        let Some(book) = catalog::find_book(&location.book) else {
            warn!(book = %location.book, "last read book is not in the catalog");
            return false;
        };
        if !book.has_chapter(location.chapter) {
            warn!(
                book = book.name,
                chapter = location.chapter,
                "last read chapter is out of range"
            );
            return false;
        }
        self.hide_cover();
        self.selected_book = Some(book);
        self.select_chapter(location.chapter, Some(location.verse));
        true
    }

    /// Ask the presentation layer to bring `verse` into view shortly.
    pub fn jump_to_verse(&mut self, verse: u32, now: Instant) {
        self.jump_target = Some(verse);
        self.jump.schedule(now, JUMP_DELAY);
    }

    /// Verse the presentation layer should scroll to, if one is due.
    pub fn take_scroll_request(&mut self) -> Option<u32> {
        self.scroll_request.take()
    }

    /// Record a scroll of the reading pane; the reading location is saved
    /// once scrolling settles.
    pub fn on_scroll(&mut self, viewport: Viewport, now: Instant) {
        self.pending_viewport = Some(viewport);
        self.scroll_settle.schedule(now, SCROLL_SETTLE_DELAY);
    }

    fn settle_scroll(&mut self) {
        let Some(viewport) = self.pending_viewport.take() else {
            return;
        };
        let (Some(book), Some(chapter)) = (self.selected_book, self.selected_chapter) else {
            return;
        };
        let verse = topmost_visible_verse(&viewport);
        self.save_last_read(book.name, chapter, verse);
    }

    fn save_last_read(&mut self, book: &str, chapter: u32, verse: u32) {
        let location = ReadingLocation {
            book: book.to_string(),
            chapter,
            verse,
        };
        match serde_json::to_string(&location) {
            Ok(json) => self.write_key(LAST_READ_KEY, &json),
            Err(err) => error!("failed to serialize reading location: {err}"),
        }
        self.last_read = Some(location);
    }

    // ----- notes --------------------------------------------------------

    /// Replace the notes text; the write happens once typing pauses.
    pub fn edit_notes(&mut self, text: impl Into<String>, now: Instant) {
        self.notes = text.into();
        if self.notes_key().is_none() {
            return;
        }
        self.save_status = SaveStatus::Saving;
        self.save_status_reset.cancel();
        self.notes_save.schedule(now, NOTES_SAVE_DELAY);
    }

    /// Write anything still waiting on a debounce timer. Called before the
    /// session is torn down.
    pub fn flush_pending(&mut self, now: Instant) {
        if self.notes_save.is_pending() {
            self.notes_save.cancel();
            self.flush_notes(now);
        }
    }

    fn flush_notes(&mut self, now: Instant) {
        let Some(key) = self.notes_key() else {
            return;
        };
        let notes = self.notes.clone();
        self.write_key(&key, &notes);
        self.save_status = SaveStatus::Saved;
        self.save_status_reset.schedule(now, SAVED_STATUS_DURATION);
    }

    // ----- highlights and the context menu ------------------------------

    pub fn open_context_menu(&mut self, verse: u32, x: u16, y: u16) {
        self.context_menu.toggle_for(verse, x, y);
    }

    pub fn hide_context_menu(&mut self) {
        self.context_menu.hide();
    }

    pub fn pointer_pressed(&mut self, target: PointerTarget) {
        self.context_menu.dismiss_for(target);
    }

    /// Highlight the context-menu verse. The menu closes either way.
    pub fn set_highlight(&mut self, color: HighlightColor) {
        if let Some((book, chapter, verse)) = self.menu_verse() {
            self.write_key(&highlight_key(book, chapter, verse), color.as_str());
            self.highlights.insert(verse, color);
        }
        self.hide_context_menu();
    }

    pub fn remove_highlight(&mut self) {
        if let Some((book, chapter, verse)) = self.menu_verse() {
            self.remove_key(&highlight_key(book, chapter, verse));
            self.highlights.remove(&verse);
        }
        self.hide_context_menu();
    }

    /// Menu target resolved against the loaded chapter.
    fn menu_verse(&self) -> Option<(&'static str, u32, u32)> {
        let verse = self.context_menu.target()?;
        let book = self.selected_book?;
        let chapter = self.selected_chapter?;
        self.chapter.as_ref()?.find_verse(verse)?;
        Some((book.name, chapter, verse))
    }

    // ----- appearance ---------------------------------------------------

    pub fn increase_font_size(&mut self) {
        self.font.increase();
    }

    pub fn decrease_font_size(&mut self) {
        self.font.decrease();
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        let value = if self.dark_mode { "dark" } else { "light" };
        self.write_key(THEME_KEY, value);
    }

    // ----- sharing ------------------------------------------------------

    pub fn share_verse(&mut self, reference: &str, text: &str, now: Instant) {
        let payload = SharePayload::for_verse(reference, text);
        if self.share.supports_native_share() {
            if let Err(err) = self.share.share(&payload) {
                error!("error sharing: {err:#}");
            }
            return;
        }

        match self.share.copy_to_clipboard(&payload.text) {
            Ok(()) => {
                self.share_status = ShareStatus::Copied;
                self.share_status_reset.schedule(now, COPIED_STATUS_DURATION);
            }
            Err(err) => {
                error!("error copying to clipboard: {err:#}");
                self.notice = Some(CLIPBOARD_FAILED.to_string());
            }
        }
    }

    pub fn share_focused_verse(&mut self, now: Instant) {
        if let Some(verse) = self.focused_verse.clone() {
            self.share_verse(&verse.reference, &verse.text, now);
        }
    }

    /// Share a verse of the loaded chapter.
    pub fn share_verse_from_reading(&mut self, verse: u32, now: Instant) {
        let Some(found) = self.chapter.as_ref().and_then(|c| c.find_verse(verse)) else {
            return;
        };
        let reference = found.reference();
        let text = found.text.trim().to_string();
        self.share_verse(&reference, &text, now);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ----- chapter titles -----------------------------------------------

    /// Generate a title for the loaded chapter in the background.
    pub fn request_chapter_title(&mut self) {
        let (Some(book), Some(chapter)) = (self.selected_book, self.selected_chapter) else {
            return;
        };
        let oracle = Arc::clone(&self.oracle);
        let tx = self.completions_tx.clone();
        let job: Job = Box::new(move || {
            let title = oracle.generate_chapter_title(book.name, chapter);
            let completion = Completion::ChapterTitle {
                book: book.name,
                chapter,
                title,
            };
            if tx.send(completion).is_err() {
                debug!("session dropped before title generation finished");
            }
        });
        if let Err(err) = self.executor.spawn("chapter-title", job) {
            warn!("failed to dispatch title generation: {err}");
            self.chapter_title = Some(crate::services::fallback_title(book.name, chapter));
        }
    }

    // ----- event pump ---------------------------------------------------

    /// Apply finished background work and fire due timers.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            match completion {
                Completion::Chapter {
                    generation,
                    book,
                    chapter,
                    verse_to_jump,
                    content,
                } => self.apply_chapter(now, generation, book, chapter, verse_to_jump, content),
                Completion::Discovery {
                    generation,
                    outcome,
                } => self.apply_discovery(generation, outcome),
                Completion::ChapterTitle {
                    book,
                    chapter,
                    title,
                } => {
                    let current = self.selected_book.map(|b| b.name) == Some(book)
                        && self.selected_chapter == Some(chapter);
                    if current {
                        self.chapter_title = Some(title);
                    }
                }
            }
        }

        if self.notes_save.fire(now) {
            self.flush_notes(now);
        }
        if self.save_status_reset.fire(now) {
            self.save_status = SaveStatus::Idle;
        }
        if self.jump.fire(now) {
            self.scroll_request = self.jump_target.take();
        }
        if self.scroll_settle.fire(now) {
            self.settle_scroll();
        }
        if self.share_status_reset.fire(now) {
            self.share_status = ShareStatus::Idle;
        }
    }

    // ----- store helpers ------------------------------------------------

    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("store read failed: {err:#}");
                None
            }
        }
    }

    fn write_key(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("store write failed: {err:#}");
        }
    }

    fn remove_key(&mut self, key: &str) {
        if let Err(err) = self.store.delete(key) {
            warn!("store delete failed: {err:#}");
        }
    }

    // ----- accessors ----------------------------------------------------

    pub fn is_cover_visible(&self) -> bool {
        self.cover_visible
    }

    pub fn is_discovery_visible(&self) -> bool {
        self.discovery_visible
    }

    pub fn is_focused_verse_visible(&self) -> bool {
        self.focused_verse_visible
    }

    /// The reading view shows when none of the other panels does.
    pub fn is_reading_visible(&self) -> bool {
        !self.cover_visible && !self.discovery_visible && !self.focused_verse_visible
    }

    pub fn is_app_closed(&self) -> bool {
        self.app_closed
    }

    pub fn is_discover_loading(&self) -> bool {
        self.discover_loading
    }

    pub fn discover_error(&self) -> Option<&str> {
        self.discover_error.as_deref()
    }

    pub fn focused_verse(&self) -> Option<&FocusedVerse> {
        self.focused_verse.as_ref()
    }

    pub fn discovery_theme(&self) -> Option<&str> {
        self.discovery_theme.as_deref()
    }

    pub fn selected_book(&self) -> Option<&'static Book> {
        self.selected_book
    }

    pub fn selected_chapter(&self) -> Option<u32> {
        self.selected_chapter
    }

    pub fn chapter_content(&self) -> Option<&ChapterContent> {
        self.chapter.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn preamble(&self) -> Option<&'static str> {
        self.preamble
    }

    pub fn chapter_title(&self) -> Option<&str> {
        self.chapter_title.as_deref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    pub fn notes_key(&self) -> Option<String> {
        let book = self.selected_book?;
        let chapter = self.selected_chapter?;
        Some(notes_key(book.name, chapter))
    }

    pub fn highlights(&self) -> &BTreeMap<u32, HighlightColor> {
        &self.highlights
    }

    pub fn highlight_for(&self, verse: u32) -> Option<HighlightColor> {
        self.highlights.get(&verse).copied()
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.context_menu
    }

    pub fn font_size(&self) -> f32 {
        self.font.size()
    }

    pub fn font_size_percentage(&self) -> u32 {
        self.font.percentage()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn last_read(&self) -> Option<&ReadingLocation> {
        self.last_read.as_ref()
    }

    pub fn share_status(&self) -> ShareStatus {
        self.share_status
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn chapters_for_selected_book(&self) -> Vec<u32> {
        self.selected_book
            .map(|book| book.chapter_numbers().collect())
            .unwrap_or_default()
    }

    pub fn verses_for_selected_chapter(&self) -> Vec<u32> {
        self.chapter
            .as_ref()
            .map(ChapterContent::verse_numbers)
            .unwrap_or_default()
    }

    /// Verses of the loaded chapter with their section headings interleaved.
    pub fn display_items(&self) -> Vec<DisplayItem<'_>> {
        let (Some(content), Some(book), Some(chapter)) =
            (self.chapter.as_ref(), self.selected_book, self.selected_chapter)
        else {
            return Vec::new();
        };

        let mut items = Vec::with_capacity(content.verses.len());
        for verse in &content.verses {
            if let Some(title) = catalog::section_title(book.name, chapter, verse.verse) {
                items.push(DisplayItem::Title(title));
            }
            items.push(DisplayItem::Verse(verse));
        }
        items
    }
}

/// Theme-discovery path run off the session thread: ask the oracle, fetch
/// the suggested chapter, and find the verse in it.
pub(crate) fn locate_theme_verse(
    oracle: &dyn ThemeOracle,
    chapters: &dyn ChapterSource,
    theme: &str,
    books: &[&str],
) -> Result<FocusedVerse, DiscoveryError> {
    let found = oracle.find_verse_for_theme(theme, books)?;

    let content = chapters
        .fetch_chapter(&found.book, found.chapter)
        .ok_or_else(|| DiscoveryError::ChapterUnavailable {
            book: found.book.clone(),
            chapter: found.chapter,
        })?;

    let verse = content
        .find_verse(found.verse)
        .ok_or_else(|| DiscoveryError::VerseMissing {
            book: found.book.clone(),
            chapter: found.chapter,
            verse: found.verse,
        })?;

    Ok(FocusedVerse::from_verse(verse))
}
