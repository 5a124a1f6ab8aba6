use crate::models::{Book, Testament};

const fn old(name: &'static str, chapters: u32) -> Book {
    Book {
        name,
        testament: Testament::Old,
        chapters,
    }
}

const fn new(name: &'static str, chapters: u32) -> Book {
    Book {
        name,
        testament: Testament::New,
        chapters,
    }
}

/// The 66 books in traditional canon order. Names match what the text API
/// accepts once spaces are replaced with `+`.
pub(super) const BOOKS: &[Book] = &[
    old("Genesis", 50),
    old("Exodus", 40),
    old("Leviticus", 27),
    old("Numbers", 36),
    old("Deuteronomy", 34),
    old("Joshua", 24),
    old("Judges", 21),
    old("Ruth", 4),
    old("1 Samuel", 31),
    old("2 Samuel", 24),
    old("1 Kings", 22),
    old("2 Kings", 25),
    old("1 Chronicles", 29),
    old("2 Chronicles", 36),
    old("Ezra", 10),
    old("Nehemiah", 13),
    old("Esther", 10),
    old("Job", 42),
    old("Psalms", 150),
    old("Proverbs", 31),
    old("Ecclesiastes", 12),
    old("Song of Solomon", 8),
    old("Isaiah", 66),
    old("Jeremiah", 52),
    old("Lamentations", 5),
    old("Ezekiel", 48),
    old("Daniel", 12),
    old("Hosea", 14),
    old("Joel", 3),
    old("Amos", 9),
    old("Obadiah", 1),
    old("Jonah", 4),
    old("Micah", 7),
    old("Nahum", 3),
    old("Habakkuk", 3),
    old("Zephaniah", 3),
    old("Haggai", 2),
    old("Zechariah", 14),
    old("Malachi", 4),
    new("Matthew", 28),
    new("Mark", 16),
    new("Luke", 24),
    new("John", 21),
    new("Acts", 28),
    new("Romans", 16),
    new("1 Corinthians", 16),
    new("2 Corinthians", 13),
    new("Galatians", 6),
    new("Ephesians", 6),
    new("Philippians", 4),
    new("Colossians", 4),
    new("1 Thessalonians", 5),
    new("2 Thessalonians", 3),
    new("1 Timothy", 6),
    new("2 Timothy", 4),
    new("Titus", 3),
    new("Philemon", 1),
    new("Hebrews", 13),
    new("James", 5),
    new("1 Peter", 5),
    new("2 Peter", 3),
    new("1 John", 5),
    new("2 John", 1),
    new("3 John", 1),
    new("Jude", 1),
    new("Revelation", 22),
];
