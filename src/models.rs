//! Domain models shared by the catalog, the network clients, and the reading
//! session. These types stay light-weight data holders so other layers can
//! focus on coordination and presentation. Wire types mirror the JSON the
//! remote text API returns so serde can hydrate them directly.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Which half of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Testament {
    Old,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A book of the catalog. Instances live in a static table and never change
/// at runtime, so the struct is `Copy` and borrows its name statically.
pub struct Book {
    /// Canonical English name. Doubles as the identity of the book and as the
    /// prefix of every storage key derived from it.
    pub name: &'static str,
    pub testament: Testament,
    /// Number of chapters; always at least one.
    pub chapters: u32,
}

impl Book {
    /// Every chapter number of the book, in reading order.
    pub fn chapter_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.chapters
    }

    pub fn has_chapter(&self, chapter: u32) -> bool {
        (1..=self.chapters).contains(&chapter)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single verse as delivered by the text API.
pub struct Verse {
    pub book_id: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl Verse {
    /// `"<book> <chapter>:<verse>"`, the form used for sharing and for the
    /// focused-verse card.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book_name, self.chapter, self.verse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Full payload for one (book, chapter) pair. The session replaces it
/// wholesale on every chapter change and never mutates it in place.
pub struct ChapterContent {
    pub reference: String,
    pub verses: Vec<Verse>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub translation_id: String,
    #[serde(default)]
    pub translation_name: String,
    #[serde(default)]
    pub translation_note: String,
}

impl ChapterContent {
    pub fn find_verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|verse| verse.verse == number)
    }

    pub fn verse_numbers(&self) -> Vec<u32> {
        self.verses.iter().map(|verse| verse.verse).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The last position the reader viewed. Serialized as-is under the
/// `bible-last-read` key.
pub struct ReadingLocation {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

/// Closed set of highlight colors a verse can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    Yellow,
    Green,
    Red,
    Purple,
}

impl HighlightColor {
    pub const ALL: [HighlightColor; 4] = [
        HighlightColor::Yellow,
        HighlightColor::Green,
        HighlightColor::Red,
        HighlightColor::Purple,
    ];

    /// Tag written to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightColor::Yellow => "yellow",
            HighlightColor::Green => "green",
            HighlightColor::Red => "red",
            HighlightColor::Purple => "purple",
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HighlightColor {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        HighlightColor::ALL
            .into_iter()
            .find(|color| color.as_str() == raw)
            .ok_or_else(|| anyhow!("unknown highlight color `{raw}`"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Location suggested by the language model for a theme. It is only trusted
/// after the chapter has been fetched and the verse found inside it.
pub struct DiscoveryResult {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The verse shown as the answer to a theme-discovery query.
pub struct FocusedVerse {
    pub reference: String,
    pub text: String,
}

impl FocusedVerse {
    pub fn from_verse(verse: &Verse) -> Self {
        Self {
            reference: verse.reference(),
            text: verse.text.trim().to_string(),
        }
    }
}
