//! # Quizalarm Core Library
//!
//! Core logic for Quizalarm, an alarm clock that makes you answer a short
//! multiple-choice quiz before it lets you go. The `quizalarm` CLI binary is
//! a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Alarms**: daily alarms with next-occurrence scheduling, and countdown
//!   alarms
//! - **Timer**: wall-clock countdown and alarm-clock state machines, plus a
//!   tokio-driven runner that hands the chosen topics to the quiz
//! - **Quiz**: prompt construction, response parsing, static fallbacks and
//!   the session state machine
//! - **LLM**: the [`TextGenerator`] seam and its Gemini implementation
//! - **Integrations**: GitHub profile lookup for sign-in
//! - **Storage**: TOML configuration
//!
//! ## Key Components
//!
//! - [`Countdown`]: Countdown timer state machine
//! - [`QuizPipeline`]: Question and suggestion generation with fallback
//! - [`QuizSession`]: One quiz run, question by question
//! - [`Config`]: Application configuration management

pub mod alarm;
pub mod error;
pub mod events;
pub mod integrations;
pub mod llm;
pub mod quiz;
pub mod storage;
pub mod timer;

pub use alarm::{Alarm, AlarmBook, AlarmDraft, Topic, Weekday};
pub use error::{
    ConfigError, CoreError, GenerationError, ProfileError, SessionError, ValidationError,
};
pub use events::Event;
pub use integrations::{GitHubClient, GitHubUser};
pub use llm::{GeminiClient, TextGenerator};
pub use quiz::{Answer, Question, QuizPipeline, QuizResults, QuizSession, SessionState};
pub use storage::Config;
pub use timer::{AlarmClock, Countdown, CountdownRunner, Handoff};
