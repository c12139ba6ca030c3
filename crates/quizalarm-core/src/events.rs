use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::Answer;

/// Every state change in the system produces an Event.
/// The CLI prints them (as text or JSON lines); tests assert on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CountdownTick {
        remaining_ms: u64,
        /// `MM:SS`, zero padded.
        display: String,
        at: DateTime<Utc>,
    },
    /// Deadline reached. Emitted exactly once per countdown.
    CountdownCompleted {
        display: String,
        at: DateTime<Utc>,
    },
    /// A once-daily alarm reached its deadline.
    AlarmRinging {
        deadline: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    AlarmStopped {
        at: DateTime<Utc>,
    },
    QuestionsLoaded {
        count: usize,
        /// True when the static fallback set was served.
        fallback: bool,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        answer: Answer,
        at: DateTime<Utc>,
    },
    QuizCompleted {
        score: usize,
        total: usize,
        percentage: u32,
        suggestions: Vec<String>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short human-readable rendering used by the CLI text mode.
    pub fn describe(&self) -> String {
        match self {
            Event::CountdownTick { display, .. } => display.clone(),
            Event::CountdownCompleted { display, .. } => format!("{display} -- time's up!"),
            Event::AlarmRinging { deadline, .. } => {
                let local = deadline.with_timezone(&chrono::Local);
                format!("Alarm ringing ({})", local.format("%H:%M"))
            }
            Event::AlarmStopped { .. } => "Alarm stopped".to_string(),
            Event::QuestionsLoaded { count, fallback, .. } => {
                if *fallback {
                    format!("Loaded {count} questions (offline set)")
                } else {
                    format!("Loaded {count} questions")
                }
            }
            Event::AnswerRecorded { answer, .. } => {
                if answer.is_correct {
                    "Correct!".to_string()
                } else {
                    "Wrong answer".to_string()
                }
            }
            Event::QuizCompleted {
                score,
                total,
                percentage,
                ..
            } => format!("Score: {score}/{total} ({percentage}%)"),
        }
    }
}
