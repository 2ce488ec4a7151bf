//! Gemini generateContent client
//!
//! Sends the advisor prompt and RAG context to a Gemini-compatible
//! endpoint and extracts the generated summary. Request building and
//! response parsing are pure functions so the wire format is testable
//! without a network.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::GeneratorConfig;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Turn>,
}

#[derive(Debug, Serialize)]
struct Turn {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Build the generateContent request body: two user turns, the system
/// prompt followed by the RAG context.
fn build_request(system_prompt: &str, context: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![
            Turn {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: system_prompt.to_string(),
                }],
            },
            Turn {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: context.to_string(),
                }],
            },
        ],
    }
}

/// Extract the generated text from a response body, concatenating the
/// parts of the first candidate.
fn parse_response(body: GenerateResponse) -> Result<String> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .context("Generation response contained no candidates")?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        anyhow::bail!("Generation response candidate contained no text");
    }
    Ok(text)
}

/// Client for the generation service
pub struct GeminiGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl GeminiGenerator {
    /// Create a client from the given configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Model identifier this client generates with
    pub fn model_name(&self) -> &str {
        &self.config.model_id
    }

    /// Generate an advisory summary from a system prompt and RAG context.
    ///
    /// Failures (network, quota, malformed response) surface as errors
    /// for the caller to report as a non-fatal warning; they never
    /// affect ranking state.
    pub async fn generate(&self, system_prompt: &str, context: &str) -> Result<String> {
        let key = self.config.resolve_api_key()?;
        let url = self.config.endpoint();
        tracing::debug!("Requesting summary from {}", self.config.model_id);

        let response = self
            .client
            .post(&url)
            .query(&[("key", key.as_str())])
            .json(&build_request(system_prompt, context))
            .send()
            .await
            .context("Generation request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Generation request failed: HTTP {} ({})", status, body);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .context("Failed to decode generation response")?;
        parse_response(body)
    }
}
