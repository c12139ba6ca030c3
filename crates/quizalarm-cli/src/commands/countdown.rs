use std::io::Write;
use std::time::Duration;

use clap::Args;
use quizalarm_core::timer::now_ms;
use quizalarm_core::{Alarm, AlarmBook, Config, Countdown, CountdownRunner, Event, QuizSession, Topic};

use super::{quiz, runtime, CmdResult};

#[derive(Args)]
pub struct CountdownArgs {
    /// Duration in seconds
    #[arg(long)]
    seconds: u64,
    /// Alarm label
    #[arg(long, default_value = "")]
    label: String,
    /// Quiz topic (repeatable)
    #[arg(long = "topic")]
    topics: Vec<Topic>,
    /// Emit events as JSON lines
    #[arg(long)]
    json: bool,
}

pub fn run(args: CountdownArgs) -> CmdResult {
    let config = Config::load_or_default();
    let alarm = Alarm::countdown(
        args.seconds,
        &args.label,
        args.topics.into_iter().collect(),
        now_ms(),
    )?;
    let countdown = alarm
        .countdown_end_time
        .map(Countdown::new)
        .ok_or("countdown alarm has no deadline")?;
    let json = args.json;
    let mut book = AlarmBook::new();
    let alarm = book.push(alarm).clone();
    if !json {
        println!("{}", book.listing());
        println!("{} rings at {}", alarm.label, alarm.time);
    }

    let runner = CountdownRunner::with_period(Duration::from_millis(config.countdown.tick_ms));
    runtime()?.block_on(async {
        let handle = runner.spawn(
            countdown,
            alarm.topic_labels(),
            move |event| show(&event, json),
            || tracing::info!("countdown finished, starting quiz"),
        );
        let handoff = handle.finished().await.ok_or("countdown was cancelled")?;
        let session = QuizSession::from_param(Some(handoff.topics.as_str()));
        quiz::run_session(session, &config, json).await
    })
}

/// Ticks overwrite one line in text mode.
fn show(event: &Event, json: bool) {
    if json {
        if let Err(e) = super::emit(event, json) {
            tracing::warn!(error = %e, "failed to encode event");
        }
        return;
    }
    match event {
        Event::CountdownTick { display, .. } => {
            print!("\r{display}");
            let _ = std::io::stdout().flush();
        }
        other => println!("\r{}", other.describe()),
    }
}
