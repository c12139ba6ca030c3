//! In-process generator double for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::GenerationError;
use crate::llm::TextGenerator;

/// Replays canned completions in order. `None` simulates a service failure;
/// running out of responses does too.
pub(crate) struct ScriptedGenerator {
    responses: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(crate) fn new<'a>(responses: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let next = self.responses.lock().unwrap().pop_front().flatten();
        next.ok_or(GenerationError::Status {
            status: 503,
            body: "unavailable".into(),
        })
    }
}
