//! Storage key layout. Every key is a pure function of book, chapter and
//! verse so no identifiers ever need to be generated.

pub const LAST_READ_KEY: &str = "bible-last-read";
pub const THEME_KEY: &str = "theme";

pub fn notes_key(book: &str, chapter: u32) -> String {
    format!("bible-notes-{book}-{chapter}")
}

pub fn highlight_key(book: &str, chapter: u32, verse: u32) -> String {
    format!("bible-highlight-{book}-{chapter}-{verse}")
}
