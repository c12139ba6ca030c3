//! Quiz content and the session that walks a user through it.
//!
//! Questions and study suggestions come from a [`TextGenerator`] through
//! [`QuizPipeline`]. Any failure there is replaced by static fallback content,
//! so a session always has exactly three questions to present.
//!
//! [`TextGenerator`]: crate::llm::TextGenerator

mod fallback;
mod fence;
mod generator;
mod pipeline;
mod question;
mod session;
mod suggestions;
#[cfg(test)]
mod testing;

pub use fallback::{fallback_questions, fallback_suggestions, FALLBACK_SUGGESTIONS};
pub use fence::strip_code_fences;
pub use generator::{build_question_prompt, parse_questions, QUESTIONS_PER_QUIZ};
pub use pipeline::{QuestionSet, QuizPipeline};
pub use question::{correct_count, percentage, Answer, Question, QuizResults, OPTION_COUNT};
pub use session::{QuizSession, SessionState, DEFAULT_ANSWER_DELAY};
pub use suggestions::{build_suggestion_prompt, parse_suggestions, SUGGESTIONS_PER_QUIZ};
