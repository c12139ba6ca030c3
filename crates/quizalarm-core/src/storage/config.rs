//! TOML-based application configuration.
//!
//! Stores:
//! - Gemini connection settings (key, model, endpoint, timeout)
//! - GitHub API base for profile lookup
//! - Quiz and countdown pacing
//!
//! Configuration is stored at `~/.config/quizalarm/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use super::data_dir;
use crate::error::ConfigError;
use crate::quiz::DEFAULT_ANSWER_DELAY;
use crate::timer::DEFAULT_TICK;

/// Environment variable that takes precedence over `gemini.api_key`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini text-generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// GitHub profile lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_github_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How long an answer stays on screen before the next question.
    #[serde(default = "default_answer_delay_ms")]
    pub answer_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/quizalarm/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub countdown: CountdownConfig,
}

// Default functions
fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_github_api_base() -> String {
    "https://api.github.com".into()
}
fn default_answer_delay_ms() -> u64 {
    DEFAULT_ANSWER_DELAY.as_millis() as u64
}
fn default_tick_ms() -> u64 {
    DEFAULT_TICK.as_millis() as u64
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_github_api_base(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            answer_delay_ms: default_answer_delay_ms(),
        }
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl GeminiConfig {
    /// Copy of these settings with `key` replacing the stored API key, when
    /// `key` is present and non-empty.
    pub fn with_key_override(&self, key: Option<String>) -> Self {
        let mut resolved = self.clone();
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            resolved.api_key = Some(key);
        }
        resolved
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                        .into(),
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("not a leaf value".into()))
                }
                // Strings, and optional strings currently unset.
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = self.to_toml().map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Load from disk, falling back to defaults with a warning on error.
    pub fn load_or_default() -> Self {
        Self::path()
            .map(|path| Self::load_from_or_default(&path))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "config path unavailable, using defaults");
                Self::default()
            })
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %path.display(), "config could not be loaded, using defaults");
            Self::default()
        })
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Get a config value as string by dot-separated key.
    ///
    /// `Ok(None)` means the key exists but is unset.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let json = serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        let val = Self::get_json_value_by_path(&json, key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        Ok(match val {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }

    /// Set a config value by dot-separated key, checked against the type of
    /// the current value. Does not persist; call [`Config::save`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse or
    /// validate. `self` is left unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject endpoints that are not http(s) URLs and zero intervals.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("gemini.base_url", &self.gemini.base_url)?;
        check_url("github.api_base", &self.github.api_base)?;
        check_positive("gemini.timeout_secs", self.gemini.timeout_secs)?;
        check_positive("countdown.tick_ms", self.countdown.tick_ms)?;
        Ok(())
    }

    /// Gemini settings with the `GEMINI_API_KEY` environment override applied.
    pub fn resolved_gemini(&self) -> GeminiConfig {
        self.gemini
            .with_key_override(std::env::var(API_KEY_ENV).ok())
    }
}

fn check_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn check_positive(key: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must be greater than zero".into(),
        });
    }
    Ok(())
}
