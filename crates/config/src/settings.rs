//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion backend configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Translation configuration
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Speech synthesis configuration
    #[serde(default)]
    pub tts: TtsConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins (empty = localhost default)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Completion backend configuration (OpenAI-compatible API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API endpoint base
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// API key; supplied via TOGETHER_API_KEY or SAAR__LLM__API_KEY
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_seconds: u64,
}

fn default_llm_endpoint() -> String {
    "https://api.together.xyz/v1".to_string()
}

fn default_api_key() -> String {
    std::env::var("TOGETHER_API_KEY").unwrap_or_default()
}

fn default_model() -> String {
    "mistralai/Mistral-7B-Instruct-v0.2".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> usize {
    512
}

fn default_llm_timeout() -> u64 {
    30
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            api_key: default_api_key(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_llm_timeout(),
        }
    }
}

/// Translation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// LibreTranslate-compatible HTTP server
    #[default]
    Libre,
    /// Disabled (pass-through)
    Disabled,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Translation server endpoint
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_translation_timeout")]
    pub timeout_seconds: u64,
}

fn default_translation_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_translation_timeout() -> u64 {
    10
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_translation_endpoint(),
            timeout_seconds: default_translation_timeout(),
        }
    }
}

/// Speech synthesis providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProvider {
    /// HTTP synthesis sidecar returning audio bytes
    #[default]
    Http,
    /// Disabled (no audio in responses)
    Disabled,
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: SpeechProvider,

    /// Synthesis server endpoint
    #[serde(default = "default_tts_endpoint")]
    pub endpoint: String,

    /// Directory generated audio files are written to
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,

    /// Public path prefix audio files are served from
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_tts_timeout")]
    pub timeout_seconds: u64,
}

fn default_tts_endpoint() -> String {
    "http://127.0.0.1:5500".to_string()
}

fn default_audio_dir() -> String {
    "static/audio".to_string()
}

fn default_public_path() -> String {
    "/static/audio".to_string()
}

fn default_tts_timeout() -> u64 {
    20
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: SpeechProvider::default(),
            endpoint: default_tts_endpoint(),
            audio_dir: default_audio_dir(),
            public_path: default_public_path(),
            timeout_seconds: default_tts_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default log level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port must be non-zero".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature".to_string(),
                message: format!("Must be between 0.0 and 2.0, got {}", self.llm.temperature),
            });
        }

        if self.llm.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_tokens".to_string(),
                message: "Must be non-zero".to_string(),
            });
        }

        if self.tts.audio_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tts.audio_dir".to_string(),
                message: "Audio directory must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Enforce API key presence
    ///
    /// The key is never embedded in source; it must arrive through
    /// configuration or environment. Callers treat an error here as fatal
    /// at startup.
    pub fn require_api_key(&self) -> Result<(), ConfigError> {
        if self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::MissingField(
                "llm.api_key (set TOGETHER_API_KEY or SAAR__LLM__API_KEY)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env}.yaml > config/default.yaml > defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("SAAR")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.llm.model, "mistralai/Mistral-7B-Instruct-v0.2");
        assert_eq!(settings.llm.temperature, 0.7);
        assert!(matches!(
            settings.translation.provider,
            TranslationProvider::Libre
        ));
        assert_eq!(settings.tts.audio_dir, "static/audio");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.llm.temperature = 3.0;
        assert!(settings.validate().is_err());

        settings.llm.temperature = 0.7;
        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_require_api_key() {
        let mut settings = Settings::default();
        settings.llm.api_key = String::new();
        assert!(settings.require_api_key().is_err());

        settings.llm.api_key = "tgp_v1_test".to_string();
        assert!(settings.require_api_key().is_ok());
    }

    #[test]
    fn test_provider_deserialization() {
        let translation: TranslationConfig =
            serde_json::from_str(r#"{"provider": "disabled"}"#).unwrap();
        assert!(matches!(translation.provider, TranslationProvider::Disabled));

        let tts: TtsConfig = serde_json::from_str(r#"{"provider": "http"}"#).unwrap();
        assert!(matches!(tts.provider, SpeechProvider::Http));
    }
}
