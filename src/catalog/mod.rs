//! Static text catalog: the list of books plus the editorial headings shown
//! around chapters. Nothing here touches the network or the store.

mod books;
mod headings;

use crate::models::{Book, Testament};

/// Every book in canon order.
pub fn books() -> &'static [Book] {
    books::BOOKS
}

pub fn old_testament() -> impl Iterator<Item = &'static Book> {
    by_testament(Testament::Old)
}

pub fn new_testament() -> impl Iterator<Item = &'static Book> {
    by_testament(Testament::New)
}

fn by_testament(testament: Testament) -> impl Iterator<Item = &'static Book> {
    books().iter().filter(move |book| book.testament == testament)
}

pub fn find_book(name: &str) -> Option<&'static Book> {
    books().iter().find(|book| book.name == name)
}

/// Book opened when the reader starts without a selection.
pub fn default_book() -> Option<&'static Book> {
    books().first()
}

pub fn book_names() -> Vec<&'static str> {
    books().iter().map(|book| book.name).collect()
}

/// Optional editorial note displayed above a chapter.
pub fn preamble(book: &str, chapter: u32) -> Option<&'static str> {
    let key = format!("{book}-{chapter}");
    lookup(headings::PREAMBLES, &key)
}

/// Optional section heading displayed just before a verse.
pub fn section_title(book: &str, chapter: u32, verse: u32) -> Option<&'static str> {
    let key = format!("{book}-{chapter}-{verse}");
    lookup(headings::SECTION_TITLES, &key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}
