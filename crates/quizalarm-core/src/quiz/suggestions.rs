//! Study suggestion prompt construction and response parsing.

use indoc::formatdoc;

use super::fence::strip_code_fences;
use super::generator::join_topics;
use super::question::{correct_count, Answer};
use crate::error::GenerationError;

pub const SUGGESTIONS_PER_QUIZ: usize = 3;

pub fn build_suggestion_prompt<S: AsRef<str>>(topics: &[S], answers: &[Answer]) -> String {
    let topics = join_topics(topics);
    let correct = correct_count(answers);
    let total = answers.len();
    formatdoc! {r#"
        Generate 3 short study suggestions based on this quiz performance:
        - Topics: {topics}
        - Score: {correct} correct out of {total}

        Return ONLY a JSON array with exactly 3 strings like this:
        [
          "First specific suggestion with resource",
          "Second specific suggestion with resource",
          "Third specific suggestion with resource"
        ]

        Make suggestions specific to the topics and include actual resource recommendations (LeetCode problems, articles, or videos).
        Return ONLY the JSON array, no other text."#,
        topics = topics,
        correct = correct,
        total = total,
    }
}

/// Parse a completion into exactly three suggestion strings.
pub fn parse_suggestions(text: &str) -> Result<Vec<String>, GenerationError> {
    let suggestions: Vec<String> = match serde_json::from_str(strip_code_fences(text)) {
        Ok(list) => list,
        Err(e) if e.is_data() => return Err(GenerationError::Schema(e.to_string())),
        Err(e) => return Err(GenerationError::Parse(e)),
    };
    if suggestions.len() != SUGGESTIONS_PER_QUIZ {
        return Err(GenerationError::Schema(format!(
            "expected {SUGGESTIONS_PER_QUIZ} suggestions, got {}",
            suggestions.len()
        )));
    }
    Ok(suggestions)
}
