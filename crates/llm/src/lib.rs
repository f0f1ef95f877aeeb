//! Completion backend integration
//!
//! Issues a single persona-conditioned chat completion request per user
//! turn against an OpenAI-compatible API (Together AI by default) and
//! extracts the answer text. One attempt per request, no retry; the
//! orchestrator treats any failure as terminal for that request.

pub mod backend;
pub mod prompt;

pub use backend::{GenerationResult, LlmBackend, TogetherBackend, TogetherConfig};
pub use prompt::{persona_messages, Message, Role, KRISHNA_PERSONA};

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}
