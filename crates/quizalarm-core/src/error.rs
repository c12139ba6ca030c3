//! Core error types for quizalarm-core.
//!
//! This module defines the error hierarchy using thiserror. Generation
//! failures never escape the quiz pipeline (they resolve to fallback
//! content), so `GenerationError` is mostly seen by the pipeline itself and
//! by callers driving a `TextGenerator` directly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quizalarm-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Profile lookup errors
    #[error("{0}")]
    Profile(#[from] ProfileError),

    /// Quiz session misuse
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Text generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Config directory could not be determined or created
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors raised synchronously on user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Countdown must run for at least one second
    #[error("Please enter a valid duration (got {seconds} seconds)")]
    NonPositiveDuration { seconds: u64 },

    /// Wall-clock time out of range
    #[error("Invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    /// Unknown topic label
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Unknown weekday name
    #[error("Unknown day: {0}")]
    UnknownWeekday(String),

    /// Answer index outside the option range
    #[error("Option index {index} out of range (0-3)")]
    OptionOutOfRange { index: u8 },

    /// Generic empty input
    #[error("Empty value for '{0}'")]
    Empty(String),
}

/// Failures talking to, or interpreting, the text-generation service.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered 2xx but without any candidate text
    #[error("response contained no text")]
    EmptyResponse,

    /// API key missing from configuration
    #[error("no API key configured")]
    MissingApiKey,

    /// Completion text was not valid JSON
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Completion JSON did not have the expected shape
    #[error("invalid response structure: {0}")]
    Schema(String),
}

/// Profile lookup errors. Display strings are shown inline to the user.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Error fetching data")]
    Http { status: u16 },

    #[error("Please enter a GitHub username")]
    EmptyUsername,

    #[error("An error occurred: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Quiz session state machine misuse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An answer was already recorded for the current question
    #[error("answer already recorded for question {index}")]
    AnswerLocked { index: usize },

    /// Operation not valid in the current state
    #[error("cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
