//! Thin clients for the two remote services the reader depends on.

pub mod chapters;
mod error;
pub mod oracle;

pub use chapters::{BibleApiClient, ChapterSource};
pub use error::{DiscoveryError, FetchError};
pub use oracle::{fallback_title, GeminiClient, ThemeOracle};
