use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::llm::openai::DEFAULT_BASE_URL;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing credential: {0} not found")]
    MissingCredential(&'static str),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for talking to the provider. The API key is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub default_model: String,
}

/// On-disk shape; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    /// Seconds, fractions allowed.
    timeout_secs: Option<f64>,
    default_model: Option<String>,
}

impl ClientConfig {
    /// Resolve from an explicit key, falling back to `OPENAI_API_KEY`.
    ///
    /// Variables come from the process environment first, then from a `.env`
    /// file in the working directory or one of its parents.
    pub fn resolve(api_key: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve_with(api_key, env_lookup(env_file_vars(dotenvy::dotenv_iter())))
    }

    /// Like [`ClientConfig::resolve`] with an explicit `.env` path.
    pub fn resolve_with_env_file(
        api_key: Option<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, ConfigError> {
        let file_vars = env_file_vars(dotenvy::from_path_iter(path));
        Self::resolve_with(api_key, env_lookup(file_vars))
    }

    /// Like [`ClientConfig::resolve`] but reads variables through `lookup`.
    pub fn resolve_with<F>(api_key: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(api_key)
            .or_else(|| non_empty(lookup(API_KEY_ENV)))
            .ok_or(ConfigError::MissingCredential(API_KEY_ENV))?;
        let base_url =
            non_empty(lookup(BASE_URL_ENV)).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_toml_str_with(s, env_lookup(env_file_vars(dotenvy::dotenv_iter())))
    }

    fn from_toml_str_with<F>(s: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = toml::from_str(s)?;
        let mut config = Self::resolve_with(file.api_key, lookup)?;
        if let Some(base_url) = non_empty(file.base_url) {
            config.base_url = base_url;
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::try_from_secs_f64(secs)
                .ok()
                .filter(|timeout| !timeout.is_zero())
                .ok_or_else(|| {
                    ConfigError::InvalidConfig(format!(
                        "timeout_secs must be a positive number of seconds, got {secs}"
                    ))
                })?;
        }
        if let Some(model) = non_empty(file.default_model) {
            config.default_model = model;
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Entries of a `.env` file; unreadable files and malformed lines are skipped.
fn env_file_vars(entries: Result<dotenvy::Iter<File>, dotenvy::Error>) -> HashMap<String, String> {
    entries
        .map(|iter| iter.filter_map(Result::ok).collect())
        .unwrap_or_default()
}

/// Process environment first, `.env` values second.
fn env_lookup(file_vars: HashMap<String, String>) -> impl Fn(&str) -> Option<String> {
    move |name| std::env::var(name).ok().or_else(|| file_vars.get(name).cloned())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
