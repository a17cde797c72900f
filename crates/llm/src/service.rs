//! The generation service seam.

use async_trait::async_trait;

/// Errors from the chat-completion layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("chat completion error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered 2xx but the reply carried no content.
    #[error("chat completion returned no choices")]
    EmptyReply,
}

/// A service that turns a prompt into a single text reply.
///
/// The production implementation is [`crate::OpenAiClient`]; tests swap in
/// a canned stub.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Send `prompt` as a single user message and return the assistant's
    /// reply text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
