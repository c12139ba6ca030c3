//! Countdown engine.
//!
//! The countdown is a wall-clock-based state machine tracking one absolute
//! deadline. It does not use internal threads - the caller (usually
//! [`super::CountdownRunner`]) is responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Counting -> Completed
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut countdown = Countdown::new(now_ms() + 5_000);
//! // Once per second:
//! countdown.tick(); // CountdownTick until the deadline, then one CountdownCompleted
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Core countdown state.
///
/// Operates on wall-clock deltas -- no internal thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Deadline in milliseconds since the Unix epoch.
    end_epoch_ms: u64,
    completed: bool,
}

impl Countdown {
    pub fn new(end_epoch_ms: u64) -> Self {
        Self {
            end_epoch_ms,
            completed: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn end_epoch_ms(&self) -> u64 {
        self.end_epoch_ms
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn remaining_ms_at(&self, now_ms: u64) -> u64 {
        self.end_epoch_ms.saturating_sub(now_ms)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Evaluate the countdown at `now_ms`.
    ///
    /// Returns `CountdownTick` while time remains, `CountdownCompleted` the
    /// first time the deadline is observed, and `None` afterwards.
    pub fn tick_at(&mut self, now_ms: u64) -> Option<Event> {
        if self.completed {
            return None;
        }
        let remaining_ms = self.remaining_ms_at(now_ms);
        if remaining_ms == 0 {
            self.completed = true;
            tracing::info!(end_epoch_ms = self.end_epoch_ms, "countdown completed");
            return Some(Event::CountdownCompleted {
                display: format_mm_ss(0),
                at: Utc::now(),
            });
        }
        Some(Event::CountdownTick {
            remaining_ms,
            display: format_mm_ss(remaining_ms),
            at: Utc::now(),
        })
    }

    /// Call periodically. Uses the system clock.
    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }
}

/// Render milliseconds as zero-padded `MM:SS`. Minutes are not capped at 59.
pub fn format_mm_ss(remaining_ms: u64) -> String {
    let minutes = remaining_ms / 60_000;
    let seconds = (remaining_ms % 60_000) / 1000;
    format!("{minutes:02}:{seconds:02}")
}

pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(event: &Event) -> &str {
        match event {
            Event::CountdownTick { display, .. } | Event::CountdownCompleted { display, .. } => {
                display.as_str()
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(999), "00:00");
        assert_eq!(format_mm_ss(61_500), "01:01");
        assert_eq!(format_mm_ss(125 * 60_000), "125:00");
    }

    #[test]
    fn five_second_countdown_completes_once() {
        let start = 1_700_000_000_000;
        let mut countdown = Countdown::new(start + 5_000);

        let mut displays = Vec::new();
        let mut completions = 0;
        for i in 1..=7 {
            if let Some(event) = countdown.tick_at(start + i * 1000) {
                if matches!(event, Event::CountdownCompleted { .. }) {
                    completions += 1;
                }
                displays.push(display(&event).to_string());
            }
        }

        assert_eq!(displays, vec!["00:04", "00:03", "00:02", "00:01", "00:00"]);
        assert_eq!(completions, 1);
        assert!(countdown.is_completed());
    }

    #[test]
    fn past_deadline_completes_on_first_tick() {
        let mut countdown = Countdown::new(1_000);
        let event = countdown.tick_at(50_000).unwrap();
        assert!(matches!(event, Event::CountdownCompleted { .. }));
        assert_eq!(display(&event), "00:00");
        assert!(countdown.tick_at(51_000).is_none());
    }

    #[test]
    fn partial_second_floors() {
        let mut countdown = Countdown::new(10_000);
        let event = countdown.tick_at(10_000 - 1_999).unwrap();
        assert_eq!(display(&event), "00:01");
    }
}
