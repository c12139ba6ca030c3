//! Once-daily alarm watcher.
//!
//! Polled once per second like the countdown. Rings the first time the
//! wall clock reaches the deadline; stopping the alarm does not re-arm it.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmClockState {
    Armed,
    Ringing,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct AlarmClock {
    deadline: DateTime<Utc>,
    state: AlarmClockState,
}

impl AlarmClock {
    pub fn new(deadline: DateTime<Utc>) -> Self {
        Self {
            deadline,
            state: AlarmClockState::Armed,
        }
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn state(&self) -> AlarmClockState {
        self.state
    }

    pub fn is_ringing(&self) -> bool {
        self.state == AlarmClockState::Ringing
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != AlarmClockState::Armed || now < self.deadline {
            return None;
        }
        self.state = AlarmClockState::Ringing;
        tracing::info!(deadline = %self.deadline, "alarm ringing");
        Some(Event::AlarmRinging {
            deadline: self.deadline,
            at: now,
        })
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(Utc::now())
    }

    /// Silence a ringing alarm. No-op otherwise.
    pub fn stop(&mut self) -> Option<Event> {
        if self.state != AlarmClockState::Ringing {
            return None;
        }
        self.state = AlarmClockState::Stopped;
        Some(Event::AlarmStopped { at: Utc::now() })
    }

    /// Poll every `period` until the alarm rings.
    pub async fn ring(&mut self, period: Duration) -> Event {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if let Some(event) = self.tick() {
                return event;
            }
        }
    }
}
