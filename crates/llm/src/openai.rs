//! OpenAI-compatible chat-completions client.
//!
//! Wraps the `POST {base_url}/chat/completions` endpoint using
//! [`reqwest`]. Any provider speaking the same wire format works by
//! pointing `base_url` elsewhere.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::service::{GenerationService, LlmError};

/// Connection settings for a chat-completion provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base API URL, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Model name sent with every request.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// HTTP client for one chat-completion provider.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiClient {
    /// Create a client with its own connection pool and an explicit
    /// request timeout.
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or [`LlmError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl GenerationService for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": prompt },
            ],
        });

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed: ChatResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyReply)
    }
}
