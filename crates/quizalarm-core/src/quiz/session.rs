//! Quiz session state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Loading -> Presenting(0) -> ... -> Presenting(n-1) -> Results
//! Loading -> NoQuestions
//! ```
//!
//! Within `Presenting`, a recorded answer locks the question until
//! [`QuizSession::advance`] moves on after the display delay. A session is
//! never reset; retrying means building a new one.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::pipeline::QuizPipeline;
use super::question::{check_option, Answer, Question, QuizResults};
use crate::error::SessionError;
use crate::events::Event;
use crate::llm::TextGenerator;
use crate::timer::parse_topic_param;

pub const DEFAULT_ANSWER_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Loading,
    Presenting { index: usize, locked: bool },
    /// Only reachable if the generator returned nothing.
    NoQuestions,
    Results(QuizResults),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Loading => "loading",
            SessionState::Presenting { locked: false, .. } => "awaiting an answer",
            SessionState::Presenting { locked: true, .. } => "showing an answer",
            SessionState::NoQuestions => "without questions",
            SessionState::Results(_) => "showing results",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    topics: Vec<String>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    state: SessionState,
}

impl QuizSession {
    pub fn new(topics: Vec<String>) -> Self {
        Self {
            topics,
            questions: Vec::new(),
            answers: Vec::new(),
            state: SessionState::Loading,
        }
    }

    /// Session for a comma-joined topic parameter, as handed off by a timer.
    pub fn from_param(param: Option<&str>) -> Self {
        Self::new(parse_topic_param(param))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<(usize, &Question)> {
        match self.state {
            SessionState::Presenting { index, .. } => {
                self.questions.get(index).map(|q| (index, q))
            }
            _ => None,
        }
    }

    /// `Question 2 of 3`.
    pub fn progress(&self) -> Option<String> {
        self.current_question()
            .map(|(i, _)| format!("Question {} of {}", i + 1, self.questions.len()))
    }

    pub fn results(&self) -> Option<&QuizResults> {
        match &self.state {
            SessionState::Results(results) => Some(results),
            _ => None,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Generate questions and present the first one.
    pub async fn load<G: TextGenerator>(
        &mut self,
        pipeline: &QuizPipeline<G>,
    ) -> Result<Event, SessionError> {
        if self.state != SessionState::Loading {
            return Err(self.invalid("load questions"));
        }
        let set = pipeline.question_set(&self.topics).await;
        let event = Event::QuestionsLoaded {
            count: set.questions.len(),
            fallback: set.fallback,
            at: Utc::now(),
        };
        self.present(set.questions);
        Ok(event)
    }

    /// Skip generation and present the given questions.
    pub fn load_questions(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        if self.state != SessionState::Loading {
            return Err(self.invalid("load questions"));
        }
        self.present(questions);
        Ok(())
    }

    fn present(&mut self, questions: Vec<Question>) {
        self.state = if questions.is_empty() {
            SessionState::NoQuestions
        } else {
            SessionState::Presenting {
                index: 0,
                locked: false,
            }
        };
        self.questions = questions;
    }

    /// Record an answer for the current question and lock it.
    pub fn submit(&mut self, option: u8) -> Result<Event, SessionError> {
        let index = match self.state {
            SessionState::Presenting {
                index,
                locked: false,
            } => index,
            SessionState::Presenting { index, locked: true } => {
                return Err(SessionError::AnswerLocked { index })
            }
            _ => return Err(self.invalid("answer")),
        };
        check_option(option)?;
        let question = &self.questions[index];
        let answer = Answer {
            question_index: index,
            user_answer: option,
            is_correct: question.is_correct(option),
        };
        self.answers.push(answer);
        self.state = SessionState::Presenting {
            index,
            locked: true,
        };
        tracing::debug!(index, option, correct = answer.is_correct, "answer recorded");
        Ok(Event::AnswerRecorded {
            answer,
            at: Utc::now(),
        })
    }

    /// After `delay`, unlock the next question, or finish the quiz.
    ///
    /// Returns `QuizCompleted` when the last question was answered. Dropping
    /// the returned future before the delay elapses leaves the session locked
    /// on the current question.
    pub async fn advance<G: TextGenerator>(
        &mut self,
        pipeline: &QuizPipeline<G>,
        delay: Duration,
    ) -> Result<Option<Event>, SessionError> {
        let index = match self.state {
            SessionState::Presenting { index, locked: true } => index,
            _ => return Err(self.invalid("advance")),
        };

        tokio::time::sleep(delay).await;

        if index + 1 < self.questions.len() {
            self.state = SessionState::Presenting {
                index: index + 1,
                locked: false,
            };
            return Ok(None);
        }

        let suggestions = pipeline
            .generate_suggestions(&self.topics, &self.answers)
            .await;
        let results = QuizResults::new(&self.answers, self.questions.len(), suggestions);
        tracing::info!(
            score = results.score,
            total = results.total,
            percentage = results.percentage,
            "quiz completed"
        );
        let event = Event::QuizCompleted {
            score: results.score,
            total: results.total,
            percentage: results.percentage,
            suggestions: results.suggestions.clone(),
            at: Utc::now(),
        };
        self.state = SessionState::Results(results);
        Ok(Some(event))
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidState {
            action,
            state: self.state.name(),
        }
    }
}
