//! Configuration management for the KrishnaSaar backend
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, then `config/{env}.yaml`)
//! - Environment variables (`SAAR__` prefix, `__` section separator)
//!
//! Secrets are never embedded: the LLM API key must be supplied via
//! configuration or environment and its absence fails startup.

pub mod settings;

pub use settings::{
    load_settings, LlmConfig, ObservabilityConfig, ServerConfig, Settings, SpeechProvider,
    TranslationProvider, TranslationConfig, TtsConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
