use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::ChapterContent;

use super::FetchError;

const USER_AGENT: &str = concat!("scripture-reader/", env!("CARGO_PKG_VERSION"));

/// Anything able to produce the content of one chapter. Implementations are
/// shared with background jobs, hence `Send + Sync`.
pub trait ChapterSource: Send + Sync {
    /// One request per call. Every failure collapses to `None`.
    fn fetch_chapter(&self, book: &str, chapter: u32) -> Option<ChapterContent>;
}

/// Client for the public bible-api.com REST endpoint.
pub struct BibleApiClient {
    http: Client,
    base_url: String,
    translation: String,
}

impl BibleApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self {
            http,
            base_url: config.bible_api_url.clone(),
            translation: config.translation.clone(),
        })
    }

    /// `<base>/<book with whitespace as +>+<chapter>?translation=<id>`.
    pub fn chapter_url(&self, book: &str, chapter: u32) -> String {
        let book: String = book
            .chars()
            .map(|ch| if ch.is_whitespace() { '+' } else { ch })
            .collect();
        format!(
            "{}/{}+{}?translation={}",
            self.base_url.trim_end_matches('/'),
            book,
            chapter,
            self.translation
        )
    }

    fn try_fetch(&self, book: &str, chapter: u32) -> Result<ChapterContent, FetchError> {
        let url = self.chapter_url(book, chapter);
        debug!(%url, "fetching chapter");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ChapterSource for BibleApiClient {
    fn fetch_chapter(&self, book: &str, chapter: u32) -> Option<ChapterContent> {
        match self.try_fetch(book, chapter) {
            Ok(content) => Some(content),
            Err(err) => {
                warn!(book, chapter, "error fetching chapter: {err}");
                None
            }
        }
    }
}
