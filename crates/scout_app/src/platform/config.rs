use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use scout_engine::{GeminiSettings, DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "jobscout.ron";
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("no API key: set GEMINI_API_KEY or API_KEY")]
    MissingApiKey,
}

/// Settings read from `jobscout.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub model: String,
    pub data_dir: PathBuf,
    /// `None` disables the request timeout.
    pub request_timeout_secs: Option<u64>,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            data_dir: PathBuf::from(".jobscout"),
            request_timeout_secs: Some(120),
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `explicit`, or `jobscout.ron` from the working directory when it
    /// exists, or the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILENAME);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        ron::from_str(text).map_err(|err| err.to_string())
    }

    pub fn gemini_settings(&self, api_key: String) -> GeminiSettings {
        let mut settings = GeminiSettings::new(api_key);
        settings.base_url = self.api_base_url.clone();
        settings.model = self.model.clone();
        settings.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        settings
    }
}

/// First non-blank value of `GEMINI_API_KEY`, then `API_KEY`.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or(ConfigError::MissingApiKey)
}

pub fn api_key() -> Result<String, ConfigError> {
    api_key_from(|name| std::env::var(name).ok())
}
