use quizalarm_core::Topic;

use super::CmdResult;

pub fn run(json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&Topic::ALL)?);
        return Ok(());
    }
    for topic in Topic::ALL {
        println!("{topic}");
    }
    Ok(())
}
