//! Abstractions for generating bounded summaries via local providers.
//!
//! The chain runner only ever sees the [`Summarizer`] trait. The Ollama-backed provider
//! issues HTTP requests directly to the runtime; the extractive provider is a deterministic
//! local fallback that needs no model at all. Whichever provider runs, its output is clamped
//! to the fixed token budget in [`bounds`].

/// Hard token bounds applied to every provider's output.
pub mod bounds;
mod extractive;

pub use extractive::ExtractiveSummarizer;

use crate::config::{SummarizerProvider, get_config};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Errors surfaced while attempting summarization.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// Provider was explicitly disabled or unreachable.
    #[error("Summarization provider unavailable: {0}")]
    ProviderUnavailable(String),
    /// Provider returned an error response.
    #[error("Failed to generate summary: {0}")]
    GenerationFailed(String),
    /// Provider response could not be parsed.
    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),
}

/// Interface implemented by summarization providers.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Reduce the prompt text to a summary within the fixed token bounds.
    async fn generate(&self, prompt: &str) -> Result<String, SummarizerError>;
}

/// Build a summarizer based on configuration.
pub fn get_summarizer() -> Box<dyn Summarizer + Send + Sync> {
    let config = get_config();
    match config.summarizer_provider {
        SummarizerProvider::Extractive => Box::new(ExtractiveSummarizer::new()),
        SummarizerProvider::Ollama => {
            let base_url = config
                .ollama_url
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
            Box::new(OllamaSummarizer::new(
                base_url,
                config.summarizer_model.clone(),
            ))
        }
    }
}

/// Summarizer backed by a local Ollama runtime.
pub struct OllamaSummarizer {
    http: Client,
    base_url: String,
    model: String,
}

impl OllamaSummarizer {
    /// Construct a client targeting `base_url` with a fixed model identifier.
    pub fn new(base_url: String, model: String) -> Self {
        let http = Client::builder()
            .user_agent("fundreport/summary")
            .build()
            .expect("Failed to construct reqwest::Client for summarization");
        Self {
            http,
            base_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
    done: bool,
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn generate(&self, prompt: &str) -> Result<String, SummarizerError> {
        let payload = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                // Non-sampling decoding keeps repeat runs identical.
                "temperature": 0.0,
                "num_predict": bounds::MAX_SUMMARY_TOKENS,
            }
        });

        let response = self
            .http
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(|error| {
                SummarizerError::ProviderUnavailable(format!(
                    "failed to reach Ollama at {}: {error}",
                    self.base_url
                ))
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SummarizerError::ProviderUnavailable(format!(
                "Ollama endpoint {} returned 404",
                self.endpoint()
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::GenerationFailed(format!(
                "Ollama returned {status}: {body}"
            )));
        }

        let body: OllamaResponse = response.json().await.map_err(|error| {
            SummarizerError::InvalidResponse(format!("failed to decode Ollama response: {error}"))
        })?;

        if !body.done {
            return Err(SummarizerError::InvalidResponse(
                "Ollama response incomplete (streaming not supported)".into(),
            ));
        }

        Ok(bounds::clamp_to_budget(body.response.trim()))
    }
}
