//! Language-model client used for theme discovery and chapter titles. The
//! request asks Gemini for structured JSON; the shape is checked again here
//! because the schema cannot restrict the book name to the catalog.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::DiscoveryResult;

use super::DiscoveryError;

const DISCOVERY_TEMPERATURE: f32 = 0.5;
const TITLE_TEMPERATURE: f32 = 0.3;
const TITLE_MAX_TOKENS: u32 = 50;

/// Source of theme-to-verse suggestions and chapter titles.
pub trait ThemeOracle: Send + Sync {
    fn find_verse_for_theme(
        &self,
        theme: &str,
        allowed_books: &[&str],
    ) -> Result<DiscoveryResult, DiscoveryError>;

    /// Never fails; see [`fallback_title`].
    fn generate_chapter_title(&self, book: &str, chapter: u32) -> String;
}

/// Title used whenever the model cannot supply one.
pub fn fallback_title(book: &str, chapter: u32) -> String {
    format!("{book} {chapter}")
}

pub struct GeminiClient {
    http: Client,
    api_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key().map(str::to_string);
        if api_key.is_none() {
            warn!("Google GenAI API key not configured; theme discovery is disabled");
        }
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self {
            http,
            api_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, api_key: &str, request: &GenerateRequest<'_>) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("model endpoint returned {status}: {body}");
        }

        let payload: GenerateResponse = response
            .json()
            .context("failed to decode model response")?;
        payload.text().context("model response carried no text")
    }
}

impl ThemeOracle for GeminiClient {
    fn find_verse_for_theme(
        &self,
        theme: &str,
        allowed_books: &[&str],
    ) -> Result<DiscoveryResult, DiscoveryError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("theme discovery requested without an API key");
            return Err(DiscoveryError::NotConfigured);
        };

        let valid_books = allowed_books.join(", ");
        let prompt = discovery_prompt(theme, &valid_books);
        let request = GenerateRequest::new(
            &prompt,
            GenerationConfig {
                temperature: DISCOVERY_TEMPERATURE,
                max_output_tokens: None,
                response_mime_type: Some("application/json"),
                response_schema: Some(discovery_schema(&valid_books)),
            },
        );

        let text = self.generate(api_key, &request).map_err(|err| {
            error!(theme, "error fetching verse for theme: {err:#}");
            DiscoveryError::Service {
                detail: format!("{err:#}"),
            }
        })?;

        let result = parse_discovery(&text);
        match &result {
            Ok(found) => info!(
                theme,
                book = %found.book,
                chapter = found.chapter,
                verse = found.verse,
                "model suggested a verse"
            ),
            Err(err) => warn!(theme, "unusable discovery response: {err:?}"),
        }
        result
    }

    fn generate_chapter_title(&self, book: &str, chapter: u32) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return fallback_title(book, chapter);
        };

        let prompt = format!(
            "Generate a short, thematic title for {book} chapter {chapter}. The title should \
             summarize the main content or theme of the chapter, in the style of titles found \
             in printed Bibles. Provide only the title, without any additional text or formatting."
        );
        let request = GenerateRequest::new(
            &prompt,
            GenerationConfig {
                temperature: TITLE_TEMPERATURE,
                max_output_tokens: Some(TITLE_MAX_TOKENS),
                response_mime_type: None,
                response_schema: None,
            },
        );

        match self.generate(api_key, &request) {
            Ok(text) => clean_title(&text, book, chapter),
            Err(err) => {
                error!(book, chapter, "error generating chapter title: {err:#}");
                fallback_title(book, chapter)
            }
        }
    }
}

fn discovery_prompt(theme: &str, valid_books: &str) -> String {
    format!(
        "Find a single Bible verse (King James Version) that best represents the theme \
         \"{theme}\". Respond ONLY with a JSON object. The book name MUST exactly match one \
         of the following names: {valid_books}."
    )
}

fn discovery_schema(valid_books: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "book": {
                "type": "STRING",
                "description": format!(
                    "The name of the Bible book. Must be one of the following: {valid_books}"
                ),
            },
            "chapter": { "type": "INTEGER", "description": "The chapter number." },
            "verse": { "type": "INTEGER", "description": "The verse number." },
        },
        "required": ["book", "chapter", "verse"],
    })
}

/// Validate the structured output: all three fields present, the book
/// non-blank and both numbers positive.
pub fn parse_discovery(text: &str) -> Result<DiscoveryResult, DiscoveryError> {
    let unusable = |detail: String| DiscoveryError::UnusableResponse { detail };

    let value: Value = serde_json::from_str(text.trim())
        .map_err(|err| unusable(format!("response is not JSON: {err}")))?;

    let book = value
        .get("book")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|book| !book.is_empty())
        .ok_or_else(|| unusable("missing book".to_string()))?;
    let chapter = positive_field(&value, "chapter").ok_or_else(|| unusable("missing chapter".to_string()))?;
    let verse = positive_field(&value, "verse").ok_or_else(|| unusable("missing verse".to_string()))?;

    Ok(DiscoveryResult {
        book: book.to_string(),
        chapter,
        verse,
    })
}

fn positive_field(value: &Value, field: &str) -> Option<u32> {
    value
        .get(field)
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

/// Strip quotes and markdown emphasis; an empty result falls back.
pub fn clean_title(raw: &str, book: &str, chapter: u32) -> String {
    let title: String = raw.trim().chars().filter(|ch| !matches!(ch, '"' | '*')).collect();
    let title = title.trim();
    if title.is_empty() {
        fallback_title(book, chapter)
    } else {
        title.to_string()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config,
        }
    }
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
