//! Text-generation collaborators.
//!
//! The quiz pipeline only needs "prompt in, text out". Anything that can do
//! that implements [`TextGenerator`]; the production implementation is
//! [`GeminiClient`].

mod gemini;

use std::future::Future;

use crate::error::GenerationError;

pub use gemini::GeminiClient;

/// A chat/completion service accepting a prompt and returning its text.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}
