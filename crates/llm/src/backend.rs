//! OpenAI-compatible completion backend
//!
//! Works with Together AI (the default endpoint) and any other server
//! exposing the `/chat/completions` shape (vLLM, Ollama in compatible
//! mode, OpenAI itself).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::prompt::Message;
use crate::LlmError;

/// Configuration for the completion backend
#[derive(Debug, Clone)]
pub struct TogetherConfig {
    /// API endpoint base (e.g. https://api.together.xyz/v1)
    pub endpoint: String,
    /// API key
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for TogetherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.together.xyz/v1".to_string(),
            api_key: String::new(),
            model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
            temperature: 0.7,
            max_tokens: 512,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TogetherConfig {
    /// Create config with API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Build from loaded settings
    pub fn from_settings(config: &saar_config::LlmConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Result of a completion request
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Trimmed answer text
    pub text: String,
    /// Wall-clock time for the request
    pub total_time_ms: u64,
}

/// Completion backend interface
#[async_trait]
pub trait LlmBackend: Send + Sync + 'static {
    /// Generate a completion for the given messages; exactly one attempt
    async fn generate(&self, messages: &[Message]) -> Result<GenerationResult, LlmError>;

    /// Model identifier for logging
    fn model_name(&self) -> &str;
}

/// Together AI backend (OpenAI-compatible chat completions)
pub struct TogetherBackend {
    config: TogetherConfig,
    client: Client,
}

impl TogetherBackend {
    /// Create a new backend
    pub fn new(config: TogetherConfig) -> Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::Configuration(
                "API key required for completion backend".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmBackend for TogetherBackend {
    async fn generate(&self, messages: &[Message]) -> Result<GenerationResult, LlmError> {
        let start = std::time::Instant::now();

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
        };

        let response = self
            .client
            .post(self.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?;

        Ok(GenerationResult {
            text: choice.message.content.trim().to_string(),
            total_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// Chat completions API types
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}
