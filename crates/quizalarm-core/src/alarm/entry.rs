use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{Topic, Weekday};
use crate::error::ValidationError;

const DEFAULT_LABEL: &str = "Alarm";

/// A configured alarm. Lives in memory for the session only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    /// Creation time in epoch milliseconds, as a decimal string.
    pub id: String,
    /// Display-formatted deadline.
    pub time: String,
    pub label: String,
    pub is_active: bool,
    pub days_active: BTreeSet<Weekday>,
    pub topics: BTreeSet<Topic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_seconds: Option<u64>,
    /// Absolute deadline in epoch milliseconds (countdown alarms only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_end_time: Option<u64>,
}

/// User input collected before a once-daily alarm is confirmed.
#[derive(Debug, Clone, Default)]
pub struct AlarmDraft {
    pub hour: u32,
    pub minute: u32,
    pub label: String,
    pub days: BTreeSet<Weekday>,
    pub topics: BTreeSet<Topic>,
}

impl Alarm {
    /// Confirm a once-daily alarm. Returns the alarm together with its
    /// resolved deadline (see [`next_occurrence`]).
    pub fn daily<Tz: TimeZone>(
        draft: AlarmDraft,
        now: &DateTime<Tz>,
    ) -> Result<(Self, DateTime<Tz>), ValidationError> {
        let deadline = next_occurrence(draft.hour, draft.minute, now)?;
        let alarm = Self {
            id: now.timestamp_millis().to_string(),
            time: deadline.naive_local().format("%H:%M:%S").to_string(),
            label: label_or_default(&draft.label),
            is_active: true,
            days_active: draft.days,
            topics: draft.topics,
            countdown_seconds: None,
            countdown_end_time: None,
        };
        tracing::debug!(id = %alarm.id, time = %alarm.time, "daily alarm confirmed");
        Ok((alarm, deadline))
    }

    /// Confirm a countdown alarm running `seconds` from `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveDuration`] when `seconds` is zero.
    pub fn countdown(
        seconds: u64,
        label: &str,
        topics: BTreeSet<Topic>,
        now_ms: u64,
    ) -> Result<Self, ValidationError> {
        if seconds == 0 {
            return Err(ValidationError::NonPositiveDuration { seconds });
        }
        let end_ms = now_ms.saturating_add(seconds.saturating_mul(1000));
        let time = DateTime::<Utc>::from_timestamp_millis(end_ms as i64)
            .map(|dt| dt.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_default();
        Ok(Self {
            id: now_ms.to_string(),
            time,
            label: label_or_default(label),
            is_active: true,
            days_active: BTreeSet::new(),
            topics,
            countdown_seconds: Some(seconds),
            countdown_end_time: Some(end_ms),
        })
    }

    /// Topic labels in display order.
    pub fn topic_labels(&self) -> Vec<String> {
        self.topics.iter().map(|t| t.label().to_string()).collect()
    }
}

fn label_or_default(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Next wall-clock instant at `hour:minute:00` in `now`'s timezone.
///
/// If that instant today is at or before `now`, the alarm rolls over to the
/// same time tomorrow.
pub fn next_occurrence<Tz: TimeZone>(
    hour: u32,
    minute: u32,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>, ValidationError> {
    if hour > 23 || minute > 59 {
        return Err(ValidationError::InvalidTime { hour, minute });
    }
    let tz = now.timezone();
    let today = now.date_naive();
    let candidate = local_at(&tz, today, hour, minute)?;
    if candidate > *now {
        return Ok(candidate);
    }
    let tomorrow = today
        .succ_opt()
        .ok_or(ValidationError::InvalidTime { hour, minute })?;
    local_at(&tz, tomorrow, hour, minute)
}

fn local_at<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> Result<DateTime<Tz>, ValidationError> {
    let naive: NaiveDateTime = date
        .and_hms_opt(hour, minute, 0)
        .ok_or(ValidationError::InvalidTime { hour, minute })?;
    // Inside a DST gap the wall-clock time does not exist; ring an hour later.
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .ok_or(ValidationError::InvalidTime { hour, minute })
}

/// "Alarm set for" summary: `HH:MM (Monday, Friday)`.
pub fn format_schedule<Tz: TimeZone>(deadline: &DateTime<Tz>, days: &BTreeSet<Weekday>) -> String {
    let time = deadline.naive_local().format("%H:%M");
    if days.is_empty() {
        return format!("{time} (No days selected)");
    }
    let names: Vec<&str> = days.iter().map(|d| d.name()).collect();
    format!("{time} ({})", names.join(", "))
}

/// Session-scoped alarm list. Append-only.
///
/// Ids are creation timestamps, so two alarms made within the same
/// millisecond would collide; `push` bumps the later one until it is unique.
#[derive(Debug, Default, Clone)]
pub struct AlarmBook {
    alarms: Vec<Alarm>,
}

impl AlarmBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut alarm: Alarm) -> &Alarm {
        alarm.id = self.unique_id(alarm.id);
        tracing::info!(id = %alarm.id, label = %alarm.label, "alarm added");
        self.alarms.push(alarm);
        &self.alarms[self.alarms.len() - 1]
    }

    fn contains_id(&self, id: &str) -> bool {
        self.alarms.iter().any(|a| a.id == id)
    }

    fn unique_id(&self, id: String) -> String {
        if !self.contains_id(&id) {
            return id;
        }
        match id.parse::<u64>() {
            Ok(mut n) => loop {
                n = n.saturating_add(1);
                let candidate = n.to_string();
                if !self.contains_id(&candidate) {
                    return candidate;
                }
            },
            Err(_) => (1u64..)
                .map(|n| format!("{id}-{n}"))
                .find(|candidate| !self.contains_id(candidate))
                .unwrap_or(id),
        }
    }

    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    /// The "Your Alarms" listing: time, label and ON/OFF per alarm, then
    /// repeat days and topics when there are any.
    pub fn listing(&self) -> String {
        let mut out = String::from("Your Alarms");
        if self.alarms.is_empty() {
            out.push_str("\n  (none)");
        }
        for alarm in &self.alarms {
            let state = if alarm.is_active { "ON" } else { "OFF" };
            out.push_str(&format!("\n  {}  {}  [{state}]", alarm.time, alarm.label));
            if !alarm.days_active.is_empty() {
                let days: Vec<&str> = alarm.days_active.iter().map(|d| d.name()).collect();
                out.push_str(&format!("\n    Repeats on: {}", days.join(", ")));
            }
            if !alarm.topics.is_empty() {
                out.push_str(&format!("\n    Topics: {}", alarm.topic_labels().join(", ")));
            }
        }
        out
    }
}
