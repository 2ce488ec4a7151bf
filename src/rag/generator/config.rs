//! Configuration for the generation service client
//!
//! Connection settings for the Gemini-compatible generateContent
//! endpoint. The API key is resolved from the config value first, then
//! the `GEMINI_KEY` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "GEMINI_KEY";

/// Configuration for initializing a [`super::GeminiGenerator`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Model identifier, e.g. "gemini-2.5-flash"
    pub model_id: String,

    /// Base URL of the generative-language API
    pub api_base: String,

    /// API key; falls back to the `GEMINI_KEY` environment variable
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_id: "gemini-2.5-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl GeneratorConfig {
    /// Create a config for the given model with default connection settings
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            ..Default::default()
        }
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Set the API key explicitly
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Resolve the API key from the config or the environment
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var(API_KEY_ENV).context(format!(
            "No API key configured and {} is not set",
            API_KEY_ENV
        ))
    }

    /// Full URL of the generateContent endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model_id
        )
    }
}
