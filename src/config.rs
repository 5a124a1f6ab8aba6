//! Runtime configuration read from `config.toml` inside the data directory.
//! Every field has a default so a missing or partial file still yields a
//! usable reader.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable holding the language-model credential.
pub const API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_bible_api_url")]
    pub bible_api_url: String,

    #[serde(default = "default_translation")]
    pub translation: String,

    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_prefer_dark")]
    pub prefer_dark: bool,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_bible_api_url() -> String {
    "https://bible-api.com/".to_string()
}

fn default_translation() -> String {
    "kjv".to_string()
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_prefer_dark() -> bool {
    true
}

fn default_request_timeout_secs() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bible_api_url: default_bible_api_url(),
            translation: default_translation(),
            gemini_api_url: default_gemini_api_url(),
            gemini_model: default_gemini_model(),
            api_key: None,
            prefer_dark: default_prefer_dark(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load `config.toml` from `data_dir`, falling back to defaults, then
    /// apply the `API_KEY` environment override.
    pub fn load(data_dir: &Path) -> Self {
        let mut config = Self::from_file(&data_dir.join(CONFIG_FILE_NAME));
        if let Ok(key) = env::var(API_KEY_ENV) {
            config.api_key = Some(key);
        }
        config
    }

    fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), "failed to parse config, using defaults: {err}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The credential, if one is configured and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
