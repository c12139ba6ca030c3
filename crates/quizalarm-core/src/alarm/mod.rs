//! Alarm definitions and the in-memory alarm book.
//!
//! Alarms live only for the lifetime of the process. There are two flavours:
//! once-daily alarms pinned to a wall-clock time, and countdown alarms pinned
//! to an absolute epoch deadline.

mod entry;
mod topic;
mod weekday;

pub use entry::{format_schedule, next_occurrence, Alarm, AlarmBook, AlarmDraft};
pub use topic::Topic;
pub use weekday::Weekday;
