pub mod alarm;
pub mod completions;
pub mod config;
pub mod countdown;
pub mod quiz;
pub mod signin;
pub mod topics;

use std::io::Write;

use quizalarm_core::Event;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

pub(crate) fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}

/// Print an event as a JSON line, or as its text rendering.
pub(crate) fn emit(event: &Event, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else {
        println!("{}", event.describe());
    }
    Ok(())
}

/// Print a prompt without a newline. Goes to stderr in JSON mode so stdout
/// only carries events.
pub(crate) fn prompt(text: &str, json: bool) {
    if json {
        eprint!("{text}");
        let _ = std::io::stderr().flush();
    } else {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }
}

/// One line from stdin, without the line ending. `None` at end of input.
pub(crate) fn read_line() -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
