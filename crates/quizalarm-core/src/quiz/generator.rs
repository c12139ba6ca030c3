//! Question prompt construction and response parsing.

use indoc::formatdoc;
use serde_json::Value;

use super::fence::strip_code_fences;
use super::question::Question;
use crate::error::GenerationError;

pub const QUESTIONS_PER_QUIZ: usize = 3;

/// Instruction asking the model for exactly three questions as bare JSON.
pub fn build_question_prompt<S: AsRef<str>>(topics: &[S]) -> String {
    let topics = join_topics(topics);
    formatdoc! {r#"
        Generate 3 short multiple choice questions about {topics}.
        Return ONLY a JSON array with this exact format:
        [{{
          "question": "What is the time complexity of bubble sort?",
          "options": ["O(n)", "O(n^2)", "O(log n)", "O(n log n)"],
          "correctAnswer": 1
        }}, {{
          "question": "second question here",
          "options": ["option1", "option2", "option3", "option4"],
          "correctAnswer": 0
        }}, {{
          "question": "third question here",
          "options": ["option1", "option2", "option3", "option4"],
          "correctAnswer": 0
        }}]

        Rules:
        1. Return ONLY the JSON array, no other text
        2. Each question must have exactly 4 options
        3. correctAnswer must be 0-3
        4. Questions should be about: {topics}
        5. Make questions challenging but not too difficult"#,
        topics = topics,
    }
}

/// Parse and validate a completion into exactly three questions.
///
/// # Errors
///
/// `Parse` when the cleaned text is not JSON, `Schema` when it is JSON of
/// the wrong shape.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, GenerationError> {
    let value: Value = serde_json::from_str(strip_code_fences(text))?;
    if !value.is_array() {
        return Err(GenerationError::Schema("expected a JSON array".into()));
    }
    let questions: Vec<Question> =
        serde_json::from_value(value).map_err(|e| GenerationError::Schema(e.to_string()))?;
    if questions.len() != QUESTIONS_PER_QUIZ {
        return Err(GenerationError::Schema(format!(
            "expected {QUESTIONS_PER_QUIZ} questions, got {}",
            questions.len()
        )));
    }
    Ok(questions)
}

pub(crate) fn join_topics<S: AsRef<str>>(topics: &[S]) -> String {
    topics
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[
        {"question": "Q1", "options": ["a", "b", "c", "d"], "correctAnswer": 0},
        {"question": "Q2", "options": ["a", "b", "c", "d"], "correctAnswer": 3},
        {"question": "Q3", "options": ["a", "b", "c", "d"], "correctAnswer": 1}
    ]"#;

    #[test]
    fn prompt_mentions_topics_and_rules() {
        let prompt = build_question_prompt(&["Recursion", "Backtracking"]);
        assert!(prompt.starts_with("Generate 3 short multiple choice questions about Recursion, Backtracking."));
        assert!(prompt.contains("Return ONLY the JSON array"));
        assert!(prompt.contains("\"correctAnswer\": 1"));
        assert!(prompt.contains("4. Questions should be about: Recursion, Backtracking"));
    }

    #[test]
    fn prompt_with_no_topics_is_still_well_formed() {
        let prompt = build_question_prompt::<&str>(&[]);
        assert!(prompt.starts_with("Generate 3 short multiple choice questions about ."));
    }

    #[test]
    fn parses_valid_response() {
        let questions = parse_questions(VALID).unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].question(), "Q2");
        assert_eq!(questions[1].correct_answer(), 3);
    }

    #[test]
    fn parses_fenced_response() {
        let fenced = format!("```json\n{VALID}\n```");
        assert_eq!(parse_questions(&fenced).unwrap(), parse_questions(VALID).unwrap());
    }

    #[test]
    fn rejects_wrong_length() {
        let two = r#"[
            {"question": "Q1", "options": ["a", "b", "c", "d"], "correctAnswer": 0},
            {"question": "Q2", "options": ["a", "b", "c", "d"], "correctAnswer": 0}
        ]"#;
        assert!(matches!(parse_questions(two), Err(GenerationError::Schema(_))));
    }

    #[test]
    fn rejects_out_of_range_answer() {
        let bad = VALID.replace("\"correctAnswer\": 3", "\"correctAnswer\": 4");
        assert!(matches!(parse_questions(&bad), Err(GenerationError::Schema(_))));
    }

    #[test]
    fn rejects_fractional_answer() {
        let bad = VALID.replace("\"correctAnswer\": 3", "\"correctAnswer\": 1.5");
        assert!(parse_questions(&bad).is_err());
    }

    #[test]
    fn rejects_missing_field_and_non_string_option() {
        let missing = VALID.replace("\"question\": \"Q3\", ", "");
        assert!(parse_questions(&missing).is_err());
        let numeric = VALID.replacen("[\"a\", \"b\", \"c\", \"d\"]", "[1, 2, 3, 4]", 1);
        assert!(parse_questions(&numeric).is_err());
    }

    #[test]
    fn rejects_prose_and_objects() {
        assert!(matches!(
            parse_questions("Sure! Here are your questions."),
            Err(GenerationError::Parse(_))
        ));
        assert!(matches!(
            parse_questions(r#"{"questions": []}"#),
            Err(GenerationError::Schema(_))
        ));
    }
}
