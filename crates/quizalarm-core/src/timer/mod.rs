mod alarm_clock;
mod countdown;
mod runner;

pub use alarm_clock::{AlarmClock, AlarmClockState};
pub use countdown::{format_mm_ss, now_ms, Countdown};
pub use runner::{parse_topic_param, CountdownHandle, CountdownRunner, Handoff, DEFAULT_TICK};
