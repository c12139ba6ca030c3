//! Gemini `generateContent` client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::TextGenerator;
use crate::error::GenerationError;
use crate::storage::GeminiConfig;

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    /// Build a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn request(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let resp = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateResponse = resp.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "requesting completion");
        let text = self.request(prompt).await?;
        tracing::debug!(response = %text, "completion received");
        Ok(text)
    }
}
