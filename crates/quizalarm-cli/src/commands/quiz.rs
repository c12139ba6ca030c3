use std::time::Duration;

use clap::Args;
use quizalarm_core::{Config, GeminiClient, QuizPipeline, QuizSession, SessionState};

use super::{emit, prompt, read_line, runtime, CmdResult};

#[derive(Args)]
pub struct QuizArgs {
    /// Comma-separated topics, e.g. "Recursion,Backtracking"
    #[arg(long)]
    topics: Option<String>,
    /// Emit events as JSON lines
    #[arg(long)]
    json: bool,
}

pub fn run(args: QuizArgs) -> CmdResult {
    let config = Config::load_or_default();
    let session = QuizSession::from_param(args.topics.as_deref());
    runtime()?.block_on(run_session(session, &config, args.json))
}

/// Drive `session` from stdin until the results are shown.
pub(crate) async fn run_session(mut session: QuizSession, config: &Config, json: bool) -> CmdResult {
    let pipeline = QuizPipeline::new(GeminiClient::new(config.resolved_gemini())?);
    let delay = Duration::from_millis(config.quiz.answer_delay_ms);

    if !json {
        println!("Loading questions...");
    }
    emit(&session.load(&pipeline).await?, json)?;
    if session.state() == &SessionState::NoQuestions {
        if !json {
            println!("No questions available");
        }
        return Ok(());
    }

    while let Some((index, question)) = session.current_question().map(|(i, q)| (i, q.clone())) {
        if !json {
            println!();
            if let Some(progress) = session.progress() {
                println!("{progress}");
            }
            println!("{}", question.question());
            for (i, option) in question.options().iter().enumerate() {
                println!("  {}) {option}", i + 1);
            }
        }

        let option = read_option(json)?;
        emit(&session.submit(option)?, json)?;
        if !json && !question.is_correct(option) {
            let correct = question.correct_answer();
            println!(
                "The answer was {}) {}",
                correct + 1,
                question.options()[usize::from(correct)]
            );
        }
        tracing::debug!(index, "waiting before next question");

        if let Some(done) = session.advance(&pipeline, delay).await? {
            emit(&done, json)?;
        }
    }

    if let Some(results) = session.results().filter(|_| !json) {
        println!();
        println!("Study suggestions:");
        for suggestion in &results.suggestions {
            println!("- {suggestion}");
        }
    }
    Ok(())
}

/// Read a 1-based choice and return it 0-based. Re-prompts on bad input.
fn read_option(json: bool) -> Result<u8, Box<dyn std::error::Error>> {
    loop {
        prompt("Answer [1-4]: ", json);
        let Some(line) = read_line()? else {
            return Err("input closed before the quiz finished".into());
        };
        match line.trim().parse::<u8>() {
            Ok(n @ 1..=4) => return Ok(n - 1),
            _ => prompt("Please enter a number from 1 to 4\n", json),
        }
    }
}
