use thiserror::Error;

/// Why a chapter request produced no content. These never reach the session:
/// the fetcher logs them and reports `None`.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("malformed chapter payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures along the theme-discovery path. The display text is what the
/// reader sees; `detail` fields carry the underlying cause for the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("Theme discovery is unavailable: no API key is configured.")]
    NotConfigured,

    #[error("Failed to communicate with the AI. Please try again later.")]
    Service { detail: String },

    #[error("The AI could not find a suitable verse. Please try again.")]
    UnusableResponse { detail: String },

    #[error("Could not load chapter content for {book} {chapter}.")]
    ChapterUnavailable { book: String, chapter: u32 },

    #[error("Verse {verse} not found in chapter content for {book} {chapter}.")]
    VerseMissing {
        book: String,
        chapter: u32,
        verse: u32,
    },

    #[error("An error occurred while fetching data. Please check your internet connection.")]
    Dispatch { detail: String },
}
