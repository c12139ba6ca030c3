use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question with exactly four options.
///
/// Immutable once built; `correct_answer` is always in `0..=3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawQuestion")]
pub struct Question {
    pub(super) question: String,
    pub(super) options: [String; OPTION_COUNT],
    pub(super) correct_answer: u8,
}

/// Wire shape accepted from the generation service before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: u8,
}

impl TryFrom<RawQuestion> for Question {
    type Error = String;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let count = raw.options.len();
        let options: [String; OPTION_COUNT] = raw
            .options
            .try_into()
            .map_err(|_| format!("expected {OPTION_COUNT} options, got {count}"))?;
        Question::new(raw.question, options, raw.correct_answer).map_err(|e| e.to_string())
    }
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_answer: u8,
    ) -> Result<Self, ValidationError> {
        check_option(correct_answer)?;
        Ok(Self {
            question: question.into(),
            options,
            correct_answer,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    pub fn correct_answer(&self) -> u8 {
        self.correct_answer
    }

    pub fn is_correct(&self, option: u8) -> bool {
        option == self.correct_answer
    }
}

pub(crate) fn check_option(index: u8) -> Result<(), ValidationError> {
    if usize::from(index) < OPTION_COUNT {
        Ok(())
    } else {
        Err(ValidationError::OptionOutOfRange { index })
    }
}

/// One recorded response. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_index: usize,
    pub user_answer: u8,
    pub is_correct: bool,
}

/// Final score and study suggestions for a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub suggestions: Vec<String>,
}

impl QuizResults {
    pub fn new(answers: &[Answer], total: usize, suggestions: Vec<String>) -> Self {
        let score = correct_count(answers);
        Self {
            score,
            total,
            percentage: percentage(score, total),
            suggestions,
        }
    }
}

pub fn correct_count(answers: &[Answer]) -> usize {
    answers.iter().filter(|a| a.is_correct).count()
}

/// `round(100 * score / total)`, half rounding up. Zero when `total` is zero.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * score as f64 / total as f64).round() as u32
}
