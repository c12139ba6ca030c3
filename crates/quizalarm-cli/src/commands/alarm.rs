use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike, Utc};
use clap::Subcommand;
use quizalarm_core::alarm::format_schedule;
use quizalarm_core::{Alarm, AlarmBook, AlarmClock, AlarmDraft, Config, QuizSession, Topic, Weekday};

use super::{emit, prompt, quiz, read_line, runtime, CmdResult};

#[derive(Subcommand)]
pub enum AlarmAction {
    /// Set a daily alarm, wait for it to ring, then take a quiz
    Set {
        /// Alarm time as HH:MM (24-hour)
        #[arg(long, value_parser = parse_time)]
        at: NaiveTime,
        /// Alarm label
        #[arg(long, default_value = "")]
        label: String,
        /// Day to repeat on (repeatable)
        #[arg(long = "day")]
        days: Vec<Weekday>,
        /// Quiz topic (repeatable)
        #[arg(long = "topic")]
        topics: Vec<Topic>,
        /// Emit events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| format!("invalid time '{s}', expected HH:MM"))
}

pub fn run(action: AlarmAction) -> CmdResult {
    match action {
        AlarmAction::Set {
            at,
            label,
            days,
            topics,
            json,
        } => {
            let config = Config::load_or_default();
            let draft = AlarmDraft {
                hour: at.hour(),
                minute: at.minute(),
                label,
                days: days.into_iter().collect::<BTreeSet<_>>(),
                topics: topics.into_iter().collect::<BTreeSet<_>>(),
            };
            let (alarm, deadline) = Alarm::daily(draft, &Local::now())?;
            let mut book = AlarmBook::new();
            let alarm = book.push(alarm).clone();
            if json {
                println!("{}", serde_json::to_string(&alarm)?);
            } else {
                println!("{}", book.listing());
                println!(
                    "{} set for {}",
                    alarm.label,
                    format_schedule(&deadline, &alarm.days_active)
                );
            }

            let period = Duration::from_millis(config.countdown.tick_ms);
            let mut clock = AlarmClock::new(deadline.with_timezone(&Utc));
            runtime()?.block_on(async {
                emit(&clock.ring(period).await, json)?;
                prompt("Press Enter to stop the alarm", json);
                read_line()?;
                if let Some(stopped) = clock.stop() {
                    emit(&stopped, json)?;
                }
                let session = QuizSession::new(alarm.topic_labels());
                quiz::run_session(session, &config, json).await
            })
        }
    }
}
