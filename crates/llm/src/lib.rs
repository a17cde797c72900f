//! Chat-completion client library for the content generation assistant.
//!
//! Exposes [`GenerationService`], the seam the API layer talks to, and an
//! OpenAI-compatible HTTP implementation. Handlers only ever see a prompt
//! in and a reply string out; provider details stay behind the trait.

pub mod openai;
pub mod service;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use service::{GenerationService, LlmError};
