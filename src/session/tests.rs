use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;

use super::*;
use crate::db::MemoryStore;
use crate::models::DiscoveryResult;

fn verse(book: &str, chapter: u32, number: u32) -> Verse {
    Verse {
        book_id: book.to_uppercase(),
        book_name: book.to_string(),
        chapter,
        verse: number,
        text: format!("  {book} {chapter} verse {number} text\n"),
    }
}

fn chapter(book: &str, number: u32, verses: u32) -> ChapterContent {
    ChapterContent {
        reference: format!("{book} {number}"),
        verses: (1..=verses).map(|v| verse(book, number, v)).collect(),
        text: String::new(),
        translation_id: "kjv".into(),
        translation_name: "King James Version".into(),
        translation_note: "Public Domain".into(),
    }
}

#[derive(Default)]
struct StaticChapters {
    chapters: HashMap<(String, u32), ChapterContent>,
    calls: AtomicUsize,
}

impl StaticChapters {
    fn with(mut self, content: ChapterContent) -> Self {
        let first = &content.verses[0];
        self.chapters
            .insert((first.book_name.clone(), first.chapter), content);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChapterSource for StaticChapters {
    fn fetch_chapter(&self, book: &str, chapter: u32) -> Option<ChapterContent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.chapters.get(&(book.to_string(), chapter)).cloned()
    }
}

#[derive(Default)]
struct ScriptedOracle {
    answers: Mutex<VecDeque<Result<DiscoveryResult, DiscoveryError>>>,
    seen_books: Mutex<usize>,
}

impl ScriptedOracle {
    fn answering(answers: Vec<Result<DiscoveryResult, DiscoveryError>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            seen_books: Mutex::new(0),
        }
    }
}

impl ThemeOracle for ScriptedOracle {
    fn find_verse_for_theme(
        &self,
        _theme: &str,
        allowed_books: &[&str],
    ) -> Result<DiscoveryResult, DiscoveryError> {
        *self.seen_books.lock().unwrap() = allowed_books.len();
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DiscoveryError::Service {
                detail: "no scripted answer".into(),
            }))
    }

    fn generate_chapter_title(&self, book: &str, chapter: u32) -> String {
        format!("Title for {book} {chapter}")
    }
}

fn found(book: &str, chapter: u32, verse: u32) -> Result<DiscoveryResult, DiscoveryError> {
    Ok(DiscoveryResult {
        book: book.into(),
        chapter,
        verse,
    })
}

#[derive(Clone, Default)]
struct FakeShare {
    native: bool,
    clipboard_fails: bool,
    shared: Rc<RefCell<Vec<SharePayload>>>,
    copied: Rc<RefCell<Vec<String>>>,
}

impl SharePlatform for FakeShare {
    fn supports_native_share(&self) -> bool {
        self.native
    }

    fn share(&mut self, payload: &SharePayload) -> anyhow::Result<()> {
        self.shared.borrow_mut().push(payload.clone());
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) -> anyhow::Result<()> {
        if self.clipboard_fails {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct FailingExecutor;

impl Executor for FailingExecutor {
    fn spawn(&self, _name: &str, _job: Job) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "no threads left"))
    }
}

/// Holds jobs until the test decides to run them.
#[derive(Clone, Default)]
struct DeferredExecutor {
    jobs: Rc<RefCell<Vec<Job>>>,
}

impl DeferredExecutor {
    fn pending(&self) -> usize {
        self.jobs.borrow().len()
    }

    fn run_newest_first(&self) {
        let jobs: Vec<Job> = self.jobs.borrow_mut().drain(..).collect();
        for job in jobs.into_iter().rev() {
            job();
        }
    }

    fn run_oldest_first(&self) {
        let jobs: Vec<Job> = self.jobs.borrow_mut().drain(..).collect();
        for job in jobs {
            job();
        }
    }
}

impl Executor for DeferredExecutor {
    fn spawn(&self, _name: &str, job: Job) -> io::Result<()> {
        self.jobs.borrow_mut().push(job);
        Ok(())
    }
}

struct Fixture {
    store: MemoryStore,
    chapters: StaticChapters,
    oracle: ScriptedOracle,
    share: FakeShare,
    prefer_dark: bool,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            store: MemoryStore::new(),
            chapters: StaticChapters::default()
                .with(chapter("Genesis", 1, 31))
                .with(chapter("John", 3, 36))
                .with(chapter("Ruth", 1, 22)),
            oracle: ScriptedOracle::default(),
            share: FakeShare::default(),
            prefer_dark: false,
        }
    }
}

struct Harness {
    session: ReadingSession,
    store: MemoryStore,
    chapters: Arc<StaticChapters>,
    share: FakeShare,
}

impl Fixture {
    fn build(self) -> Harness {
        self.build_with(Box::new(InlineExecutor))
    }

    fn build_with(self, executor: Box<dyn Executor>) -> Harness {
        let chapters = Arc::new(self.chapters);
        let services = SessionServices {
            store: Box::new(self.store.clone()),
            chapters: chapters.clone(),
            oracle: Arc::new(self.oracle),
            executor,
            share: Box::new(self.share.clone()),
        };
        Harness {
            session: ReadingSession::new(services, self.prefer_dark),
            store: self.store,
            chapters,
            share: self.share,
        }
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn open_chapter(harness: &mut Harness, book: &str, chapter: u32, now: Instant) {
    assert!(harness.session.select_book(book));
    if chapter != 1 {
        harness.session.tick(now);
        harness.session.select_chapter(chapter, None);
    }
    harness.session.tick(now);
}

#[test]
fn session_starts_on_the_cover() {
    let harness = Fixture::default().build();
    let session = &harness.session;
    assert!(session.is_cover_visible());
    assert!(!session.is_reading_visible());
    assert!(!session.is_dark_mode());
    assert!(session.last_read().is_none());
    assert!(session.chapter_content().is_none());
}

#[test]
fn chapter_selection_ends_in_content_or_error_never_both() {
    let mut harness = Fixture::default().build();
    let now = Instant::now();

    for book in catalog::books() {
        for chapter in [1, book.chapters] {
            harness.session.selected_book = Some(book);
            harness.session.select_chapter(chapter, None);
            assert!(harness.session.is_loading());
            harness.session.tick(now);

            let session = &harness.session;
            assert!(!session.is_loading(), "{} {chapter} still loading", book.name);
            assert_ne!(
                session.chapter_content().is_some(),
                session.error().is_some(),
                "{} {chapter}",
                book.name
            );
        }
    }
}

#[test]
fn missing_chapter_sets_the_load_error() {
    let mut harness = Fixture::default().build();
    open_chapter(&mut harness, "Jude", 1, Instant::now());

    assert_eq!(
        harness.session.error(),
        Some("Could not load the chapter. Please try again.")
    );
    assert!(harness.session.chapter_content().is_none());
    assert!(harness.session.last_read().is_none());
}

#[test]
fn dispatch_failure_reports_connectivity_and_clears_loading() {
    let mut harness = Fixture::default().build_with(Box::new(FailingExecutor));
    harness.session.select_book("Genesis");

    assert!(!harness.session.is_loading());
    assert_eq!(
        harness.session.error(),
        Some("An error occurred while fetching data. Please check your internet connection.")
    );
}

#[test]
fn successful_load_sets_preamble_location_and_scroll_target() {
    let mut harness = Fixture::default().build();
    let now = Instant::now();
    harness.session.selected_book = catalog::find_book("John");
    harness.session.select_chapter(3, Some(16));
    harness.session.tick(now);

    let session = &mut harness.session;
    assert_eq!(session.verses_for_selected_chapter().len(), 36);
    assert_eq!(session.chapters_for_selected_book().len(), 21);
    assert_eq!(
        session.last_read(),
        Some(&ReadingLocation {
            book: "John".into(),
            chapter: 3,
            verse: 16,
        })
    );
    assert_eq!(
        harness.store.value(LAST_READ_KEY).as_deref(),
        Some(r#"{"book":"John","chapter":3,"verse":16}"#)
    );

    assert_eq!(session.take_scroll_request(), None);
    session.tick(now + ms(99));
    assert_eq!(session.take_scroll_request(), None);
    session.tick(now + JUMP_DELAY);
    assert_eq!(session.take_scroll_request(), Some(16));
    assert_eq!(session.take_scroll_request(), None);
}

#[test]
fn genesis_one_carries_a_preamble_and_john_three_a_section_title() {
    let mut harness = Fixture::default().build();
    let now = Instant::now();
    open_chapter(&mut harness, "Genesis", 1, now);
    assert!(harness.session.preamble().is_some());

    open_chapter(&mut harness, "John", 3, now);
    assert!(harness.session.preamble().is_none());
    let items = harness.session.display_items();
    assert_eq!(items.len(), 37);
    assert_eq!(items[0], DisplayItem::Title("Jesus and Nicodemus"));
    assert!(matches!(items[1], DisplayItem::Verse(v) if v.verse == 1));
}

#[test]
fn rapid_note_edits_produce_a_single_write_with_the_final_text() {
    let mut harness = Fixture::default().build();
    let start = Instant::now();
    open_chapter(&mut harness, "Ruth", 1, start);
    let key = "bible-notes-Ruth-1";

    let mut text = String::new();
    for (idx, ch) in "whither thou goest".chars().enumerate() {
        text.push(ch);
        let now = start + ms(idx as u64 * 200);
        harness.session.edit_notes(text.clone(), now);
        harness.session.tick(now);
        assert_eq!(harness.session.save_status(), SaveStatus::Saving);
    }
    assert_eq!(harness.store.write_count(key), 0);

    let last_edit = start + ms(17 * 200);
    harness.session.tick(last_edit + ms(1499));
    assert_eq!(harness.store.write_count(key), 0);

    harness.session.tick(last_edit + NOTES_SAVE_DELAY);
    assert_eq!(harness.store.write_count(key), 1);
    assert_eq!(harness.store.value(key).as_deref(), Some("whither thou goest"));
    assert_eq!(harness.session.save_status(), SaveStatus::Saved);

    harness.session.tick(last_edit + NOTES_SAVE_DELAY + SAVED_STATUS_DURATION);
    assert_eq!(harness.session.save_status(), SaveStatus::Idle);
    assert_eq!(harness.store.write_count(key), 1);
}

#[test]
fn flushing_pending_work_writes_notes_before_the_debounce() {
    let mut harness = Fixture::default().build();
    let now = Instant::now();
    open_chapter(&mut harness, "Ruth", 1, now);

    harness.session.edit_notes("entreat me not", now + ms(100));
    harness.session.flush_pending(now + ms(200));
    assert_eq!(
        harness.store.value("bible-notes-Ruth-1").as_deref(),
        Some("entreat me not")
    );
    assert_eq!(harness.session.save_status(), SaveStatus::Saved);

    harness.session.tick(now + ms(10_000));
    harness.session.flush_pending(now + ms(10_000));
    assert_eq!(harness.store.write_count("bible-notes-Ruth-1"), 1);
}

#[test]
fn notes_without_a_chapter_are_not_scheduled() {
    let mut harness = Fixture::default().build();
    let now = Instant::now();
    harness.session.edit_notes("stray", now);
    harness.session.tick(now + ms(5000));
    assert_eq!(harness.session.notes(), "stray");
    assert_eq!(harness.session.save_status(), SaveStatus::Idle);
    assert!(harness.store.is_empty());
}

#[test]
fn switching_chapters_loads_saved_notes_and_cancels_pending_save() {
    let mut fixture = Fixture::default();
    let mut store = fixture.store.clone();
    store.set("bible-notes-John-3", "born again").unwrap();
    fixture.store = store;
    let mut harness = fixture.build();
    let now = Instant::now();

    open_chapter(&mut harness, "Ruth", 1, now);
    assert_eq!(harness.session.notes(), "");
    harness.session.edit_notes("draft", now);

    open_chapter(&mut harness, "John", 3, now + ms(100));
    assert_eq!(harness.session.notes(), "born again");
    assert_eq!(harness.session.save_status(), SaveStatus::Idle);

    harness.session.tick(now + ms(10_000));
    assert_eq!(harness.store.write_count("bible-notes-Ruth-1"), 0);
    assert_eq!(harness.store.write_count("bible-notes-John-3"), 1);
}

#[test]
fn highlights_survive_a_chapter_reload() {
    let mut harness = Fixture::default().build();
    let now = Instant::now();
    open_chapter(&mut harness, "John", 3, now);

    harness.session.open_context_menu(16, 4, 8);
    harness.session.set_highlight(HighlightColor::Yellow);
    assert!(!harness.session.context_menu().visible);
    harness.session.open_context_menu(17, 4, 9);
    harness.session.set_highlight(HighlightColor::Green);
    assert_eq!(
        harness.store.value("bible-highlight-John-3-16").as_deref(),
        Some("yellow")
    );

    open_chapter(&mut harness, "Ruth", 1, now);
    assert!(harness.session.highlights().is_empty());

    open_chapter(&mut harness, "John", 3, now);
    assert_eq!(harness.session.highlight_for(16), Some(HighlightColor::Yellow));
    assert_eq!(harness.session.highlight_for(17), Some(HighlightColor::Green));

    harness.session.open_context_menu(16, 4, 8);
    harness.session.remove_highlight();
    assert_eq!(harness.session.highlight_for(16), None);
    assert!(!harness.session.context_menu().visible);

    open_chapter(&mut harness, "John", 3, now);
    assert_eq!(harness.session.highlight_for(16), None);
    assert_eq!(harness.session.highlights().len(), 1);
}

#[test]
fn unknown_stored_colors_and_foreign_verses_are_ignored() {
    let fixture = Fixture::default();
    let mut store = fixture.store.clone();
    store.set("bible-highlight-Ruth-1-3", "chartreuse").unwrap();
    store.set("bible-highlight-Ruth-1-99", "red").unwrap();
    store.set("bible-highlight-Ruth-1-4", "red").unwrap();
    let mut harness = fixture.build();
    open_chapter(&mut harness, "Ruth", 1, Instant::now());

    let keys: Vec<u32> = harness.session.highlights().keys().copied().collect();
    assert_eq!(keys, vec![4]);
}

#[test]
fn highlight_without_menu_target_only_closes_the_menu() {
    let mut harness = Fixture::default().build();
    open_chapter(&mut harness, "Ruth", 1, Instant::now());
    let writes_before = harness.store.len();

    harness.session.set_highlight(HighlightColor::Red);
    assert_eq!(harness.store.len(), writes_before);
    assert!(harness.session.highlights().is_empty());
}

#[test]
fn context_menu_toggles_and_moves_between_verses() {
    let mut harness = Fixture::default().build();
    open_chapter(&mut harness, "Ruth", 1, Instant::now());
    let session = &mut harness.session;

    session.open_context_menu(3, 1, 1);
    session.open_context_menu(3, 1, 1);
    assert!(!session.context_menu().visible);

    session.open_context_menu(3, 1, 1);
    session.open_context_menu(5, 2, 6);
    assert_eq!(session.context_menu().target(), Some(5));

    session.pointer_pressed(PointerTarget::Menu);
    assert!(session.context_menu().visible);
    session.pointer_pressed(PointerTarget::Elsewhere);
    assert!(!session.context_menu().visible);
}

#[test]
fn discovery_happy_path_focuses_john_three_sixteen() {
    let executor = DeferredExecutor::default();
    let mut fixture = Fixture::default();
    fixture.oracle = ScriptedOracle::answering(vec![found("John", 3, 16)]);
    let mut harness = fixture.build_with(Box::new(executor.clone()));

    harness.session.show_discovery();
    harness.session.discover_theme("love");
    assert!(harness.session.is_discover_loading());
    assert!(!harness.session.is_discovery_visible());
    assert_eq!(executor.pending(), 1);

    executor.run_oldest_first();
    harness.session.tick(Instant::now());

    let session = &harness.session;
    assert!(!session.is_discover_loading());
    assert!(session.is_focused_verse_visible());
    assert!(session.discover_error().is_none());
    let focused = session.focused_verse().unwrap();
    assert_eq!(focused.reference, "John 3:16");
    assert_eq!(focused.text, "John 3 verse 16 text");
}

#[test]
fn discovery_verse_not_found_returns_to_the_discovery_panel() {
    let mut fixture = Fixture::default();
    fixture.oracle = ScriptedOracle::answering(vec![found("John", 3, 999)]);
    let mut harness = fixture.build();

    harness.session.show_discovery();
    harness.session.discover_theme("love");
    harness.session.tick(Instant::now());

    let session = &harness.session;
    assert_eq!(
        session.discover_error(),
        Some("Verse 999 not found in chapter content for John 3.")
    );
    assert!(!session.is_focused_verse_visible());
    assert!(session.is_discovery_visible());
    assert!(!session.is_discover_loading());
}

#[test]
fn discovery_failures_surface_their_own_messages() {
    let cases = vec![
        (
            Err(DiscoveryError::Service {
                detail: "503".into(),
            }),
            "Failed to communicate with the AI. Please try again later.",
        ),
        (
            Err(DiscoveryError::UnusableResponse {
                detail: "missing verse".into(),
            }),
            "The AI could not find a suitable verse. Please try again.",
        ),
        (
            found("Jude", 1, 3),
            "Could not load chapter content for Jude 1.",
        ),
    ];

    for (answer, message) in cases {
        let mut fixture = Fixture::default();
        fixture.oracle = ScriptedOracle::answering(vec![answer]);
        let mut harness = fixture.build();
        harness.session.show_discovery();
        harness.session.discover_theme("peace");
        harness.session.tick(Instant::now());

        assert_eq!(harness.session.discover_error(), Some(message));
        assert!(harness.session.is_discovery_visible());
        assert!(!harness.session.is_discover_loading());
    }
}

#[test]
fn discovery_offers_the_whole_catalog_to_the_oracle() {
    let oracle = Arc::new(ScriptedOracle::answering(vec![found("John", 3, 16)]));
    let chapters = StaticChapters::default().with(chapter("John", 3, 36));
    let focused =
        locate_theme_verse(oracle.as_ref(), &chapters, "love", &catalog::book_names()).unwrap();
    assert_eq!(focused.reference, "John 3:16");
    assert_eq!(*oracle.seen_books.lock().unwrap(), 66);
}

#[test]
fn rerolling_keeps_the_focused_verse_on_screen_while_loading() {
    let executor = DeferredExecutor::default();
    let mut fixture = Fixture::default();
    fixture.oracle =
        ScriptedOracle::answering(vec![found("John", 3, 16), found("Ruth", 1, 16)]);
    let mut harness = fixture.build_with(Box::new(executor.clone()));

    harness.session.show_discovery();
    harness.session.discover_theme("loyalty");
    executor.run_oldest_first();
    harness.session.tick(Instant::now());

    harness.session.find_another_verse();
    assert!(harness.session.is_discover_loading());
    assert!(harness.session.is_focused_verse_visible());
    assert_eq!(harness.session.focused_verse().unwrap().reference, "John 3:16");

    executor.run_oldest_first();
    harness.session.tick(Instant::now());
    assert_eq!(harness.session.focused_verse().unwrap().reference, "Ruth 1:16");
    assert_eq!(harness.session.discovery_theme(), Some("loyalty"));
}

#[test]
fn returning_to_discovery_clears_the_previous_answer() {
    let mut fixture = Fixture::default();
    fixture.oracle = ScriptedOracle::answering(vec![found("John", 3, 16)]);
    let mut harness = fixture.build();
    harness.session.show_discovery();
    harness.session.discover_theme("love");
    harness.session.tick(Instant::now());

    harness.session.return_to_discovery();
    let session = &mut harness.session;
    assert!(session.is_discovery_visible());
    assert!(!session.is_focused_verse_visible());
    assert!(session.focused_verse().is_none());
    assert!(session.discovery_theme().is_none());

    session.find_another_verse();
    assert!(!session.is_discover_loading());
}

#[test]
fn stale_chapter_responses_do_not_overwrite_newer_ones() {
    let executor = DeferredExecutor::default();
    let mut harness = Fixture::default().build_with(Box::new(executor.clone()));

    harness.session.select_book("Genesis");
    harness.session.select_book("Ruth");
    assert_eq!(executor.pending(), 2);

    executor.run_newest_first();
    harness.session.tick(Instant::now());

    let content = harness.session.chapter_content().unwrap();
    assert_eq!(content.reference, "Ruth 1");
    assert_eq!(harness.session.last_read().unwrap().book, "Ruth");
    assert!(!harness.session.is_loading());
}

#[test]
fn stale_discovery_results_are_dropped() {
    let executor = DeferredExecutor::default();
    let mut fixture = Fixture::default();
    fixture.oracle =
        ScriptedOracle::answering(vec![found("John", 3, 16), found("Ruth", 1, 16)]);
    let mut harness = fixture.build_with(Box::new(executor.clone()));

    harness.session.show_discovery();
    harness.session.discover_theme("first");
    harness.session.discover_theme("second");
    // The older job runs last and so receives the second scripted answer.
    executor.run_newest_first();
    harness.session.tick(Instant::now());

    assert_eq!(harness.session.focused_verse().unwrap().reference, "John 3:16");
    assert!(!harness.session.is_discover_loading());
}

#[test]
fn leaving_discovery_mid_lookup_drops_the_late_answer() {
    let executor = DeferredExecutor::default();
    let mut fixture = Fixture::default();
    fixture.oracle = ScriptedOracle::answering(vec![found("John", 3, 16)]);
    let mut harness = fixture.build_with(Box::new(executor.clone()));
    let now = Instant::now();

    harness.session.show_discovery();
    harness.session.discover_theme("love");
    harness.session.return_to_cover();
    assert!(!harness.session.is_discover_loading());

    executor.run_oldest_first();
    harness.session.tick(now);
    assert!(harness.session.focused_verse().is_none());
    assert!(!harness.session.is_focused_verse_visible());

    harness.session.open_app_to_default();
    executor.run_oldest_first();
    harness.session.tick(now);
    assert!(harness.session.is_reading_visible());
    assert!(!harness.session.is_cover_visible());
    assert_eq!(harness.session.chapter_content().unwrap().reference, "Genesis 1");
}

#[test]
fn returning_to_discovery_mid_reroll_keeps_the_answer_cleared() {
    let executor = DeferredExecutor::default();
    let mut fixture = Fixture::default();
    fixture.oracle =
        ScriptedOracle::answering(vec![found("John", 3, 16), found("Ruth", 1, 16)]);
    let mut harness = fixture.build_with(Box::new(executor.clone()));
    let now = Instant::now();

    harness.session.show_discovery();
    harness.session.discover_theme("love");
    executor.run_oldest_first();
    harness.session.tick(now);
    assert_eq!(harness.session.focused_verse().unwrap().reference, "John 3:16");

    harness.session.find_another_verse();
    assert!(harness.session.is_discover_loading());
    harness.session.return_to_discovery();
    executor.run_oldest_first();
    harness.session.tick(now);

    let session = &harness.session;
    assert!(session.focused_verse().is_none());
    assert!(session.discovery_theme().is_none());
    assert!(!session.is_focused_verse_visible());
    assert!(session.is_discovery_visible());
    assert!(!session.is_discover_loading());
}

#[test]
fn opening_to_default_loads_genesis_once() {
    let mut harness = Fixture::default().build();
    let now = Instant::now();

    harness.session.open_app_to_default();
    harness.session.tick(now);
    assert!(harness.session.is_reading_visible());
    assert_eq!(harness.session.selected_book().map(|b| b.name), Some("Genesis"));
    assert_eq!(harness.session.selected_chapter(), Some(1));
    assert_eq!(harness.chapters.calls(), 1);

    harness.session.return_to_cover();
    harness.session.open_app_to_default();
    harness.session.tick(now);
    assert_eq!(harness.chapters.calls(), 1);
}

#[test]
fn closing_and_returning_to_cover_resets_panels() {
    let mut harness = Fixture::default().build();
    harness.session.show_discovery();
    harness.session.close_app();
    assert!(harness.session.is_app_closed());

    harness.session.return_to_cover();
    let session = &harness.session;
    assert!(!session.is_app_closed());
    assert!(session.is_cover_visible());
    assert!(!session.is_discovery_visible());
    assert!(!session.is_focused_verse_visible());
}

#[test]
fn scroll_tracking_saves_the_topmost_verse_once_settled() {
    let mut harness = Fixture::default().build();
    let start = Instant::now();
    open_chapter(&mut harness, "Ruth", 1, start);

    let viewport = |first_top: i32| Viewport {
        top: 0,
        verses: (1..=22)
            .map(|verse| VersePosition {
                verse,
                top: first_top + (verse as i32 - 1) * 3,
            })
            .collect(),
    };

    harness.session.on_scroll(viewport(-10), start);
    harness.session.on_scroll(viewport(-20), start + ms(200));
    harness.session.tick(start + ms(300));
    assert_eq!(harness.session.last_read().unwrap().verse, 1);

    harness.session.tick(start + ms(450));
    assert_eq!(harness.session.last_read().unwrap().verse, 8);

    harness.session.on_scroll(viewport(-100), start + ms(500));
    harness.session.tick(start + ms(750));
    assert_eq!(harness.session.last_read().unwrap().verse, 22);
    assert_eq!(
        harness.store.value(LAST_READ_KEY).as_deref(),
        Some(r#"{"book":"Ruth","chapter":1,"verse":22}"#)
    );
}

#[test]
fn last_read_is_restored_and_resumable() {
    let fixture = Fixture::default();
    let mut store = fixture.store.clone();
    store
        .set(LAST_READ_KEY, r#"{"book":"John","chapter":3,"verse":16}"#)
        .unwrap();
    let mut harness = fixture.build();
    let now = Instant::now();

    assert_eq!(harness.session.last_read().unwrap().chapter, 3);
    assert!(harness.session.resume_reading());
    harness.session.tick(now);
    harness.session.tick(now + JUMP_DELAY);

    assert!(!harness.session.is_cover_visible());
    assert_eq!(harness.session.chapter_content().unwrap().reference, "John 3");
    assert_eq!(harness.session.take_scroll_request(), Some(16));
}

#[test]
fn corrupt_last_read_is_discarded() {
    let fixture = Fixture::default();
    let mut store = fixture.store.clone();
    store.set(LAST_READ_KEY, "{not json").unwrap();
    let mut harness = fixture.build();

    assert!(harness.session.last_read().is_none());
    assert!(harness.store.value(LAST_READ_KEY).is_none());
    assert!(!harness.session.resume_reading());
}

#[test]
fn last_read_outside_the_book_is_not_resumed() {
    let fixture = Fixture::default();
    let mut store = fixture.store.clone();
    store
        .set(LAST_READ_KEY, r#"{"book":"Ruth","chapter":9,"verse":1}"#)
        .unwrap();
    let mut harness = fixture.build();

    assert!(!harness.session.resume_reading());
    assert!(harness.session.is_cover_visible());
    assert!(harness.session.selected_chapter().is_none());
}

#[test]
fn theme_preference_is_restored_and_persisted() {
    let mut fixture = Fixture::default();
    fixture.prefer_dark = true;
    let mut harness = fixture.build();
    assert!(harness.session.is_dark_mode());
    harness.session.toggle_theme();
    assert!(!harness.session.is_dark_mode());
    assert_eq!(harness.store.value(THEME_KEY).as_deref(), Some("light"));

    let mut fixture = Fixture::default();
    fixture.store = harness.store.clone();
    fixture.prefer_dark = true;
    let harness = fixture.build();
    assert!(!harness.session.is_dark_mode());
}

#[test]
fn font_size_stays_within_bounds() {
    let mut harness = Fixture::default().build();
    for _ in 0..30 {
        harness.session.increase_font_size();
    }
    assert_eq!(harness.session.font_size(), MAX_FONT_SIZE);
    for _ in 0..30 {
        harness.session.decrease_font_size();
    }
    assert_eq!(harness.session.font_size(), MIN_FONT_SIZE);
}

#[test]
fn native_share_is_preferred_over_the_clipboard() {
    let mut fixture = Fixture::default();
    fixture.share.native = true;
    let mut harness = fixture.build();
    open_chapter(&mut harness, "Ruth", 1, Instant::now());

    harness.session.share_verse_from_reading(16, Instant::now());
    let shared = harness.share.shared.borrow();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].text, "\"Ruth 1 verse 16 text\" - Ruth 1:16");
    assert!(harness.share.copied.borrow().is_empty());
    assert_eq!(harness.session.share_status(), ShareStatus::Idle);
}

#[test]
fn clipboard_fallback_shows_copied_briefly() {
    let mut fixture = Fixture::default();
    fixture.oracle = ScriptedOracle::answering(vec![found("John", 3, 16)]);
    let mut harness = fixture.build();
    let now = Instant::now();
    harness.session.show_discovery();
    harness.session.discover_theme("love");
    harness.session.tick(now);

    harness.session.share_focused_verse(now);
    assert_eq!(
        *harness.share.copied.borrow(),
        vec!["\"John 3 verse 16 text\" - John 3:16".to_string()]
    );
    assert_eq!(harness.session.share_status(), ShareStatus::Copied);
    harness.session.tick(now + COPIED_STATUS_DURATION);
    assert_eq!(harness.session.share_status(), ShareStatus::Idle);
}

#[test]
fn clipboard_failure_raises_a_notice() {
    let mut fixture = Fixture::default();
    fixture.share.clipboard_fails = true;
    let mut harness = fixture.build();

    harness.session.share_verse("John 11:35", "Jesus wept.", Instant::now());
    assert_eq!(harness.session.notice(), Some("Could not copy text to clipboard."));
    assert_eq!(harness.session.share_status(), ShareStatus::Idle);
    harness.session.dismiss_notice();
    assert!(harness.session.notice().is_none());
}

#[test]
fn chapter_title_applies_only_to_the_chapter_it_was_asked_for() {
    let executor = DeferredExecutor::default();
    let mut harness = Fixture::default().build_with(Box::new(executor.clone()));
    let now = Instant::now();

    harness.session.select_book("Ruth");
    executor.run_oldest_first();
    harness.session.tick(now);

    harness.session.request_chapter_title();
    executor.run_oldest_first();
    harness.session.tick(now);
    assert_eq!(harness.session.chapter_title(), Some("Title for Ruth 1"));

    harness.session.request_chapter_title();
    harness.session.select_book("Genesis");
    executor.run_oldest_first();
    harness.session.tick(now);
    assert_eq!(harness.session.chapter_title(), None);
}
