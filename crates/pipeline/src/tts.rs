//! Speech rendering
//!
//! `HttpSpeechSynthesizer` posts text to a synthesis sidecar, writes the
//! returned audio bytes under the configured audio directory with a fresh
//! uuid filename, and returns the public URL. Filenames are never derived
//! from external input.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use saar_config::{SpeechProvider, TtsConfig};
use saar_core::{AudioArtifact, Language, SpeechSynthesizer, SynthesisError};

/// Languages the synthesis sidecar can render
const SUPPORTED: &[Language] = &[
    Language::English,
    Language::Hindi,
    Language::Telugu,
    Language::Tamil,
    Language::Bengali,
];

/// Configuration for the HTTP synthesizer
#[derive(Debug, Clone)]
pub struct HttpSynthesizerConfig {
    /// Sidecar endpoint base
    pub endpoint: String,
    /// Directory audio files are written to
    pub audio_dir: PathBuf,
    /// Public path prefix files are served from
    pub public_path: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpSynthesizerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5500".to_string(),
            audio_dir: PathBuf::from("static/audio"),
            public_path: "/static/audio".to_string(),
            timeout: Duration::from_secs(20),
        }
    }
}

/// HTTP speech synthesizer writing uuid-named artifacts
pub struct HttpSpeechSynthesizer {
    config: HttpSynthesizerConfig,
    client: Client,
}

impl HttpSpeechSynthesizer {
    pub fn new(config: HttpSynthesizerConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    fn synthesize_url(&self) -> String {
        format!("{}/synthesize", self.config.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<AudioArtifact, SynthesisError> {
        if !self.supports_language(language) {
            return Err(SynthesisError::UnsupportedLanguage(language));
        }

        let request = SynthesizeRequest {
            text,
            language: language.code(),
        };

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| SynthesisError::Backend(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Backend(format!("HTTP {}: {}", status, body)));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Backend(format!("failed to read audio: {}", e)))?;

        if audio.is_empty() {
            return Err(SynthesisError::Backend("empty audio body".to_string()));
        }

        // Fresh collision-resistant name per request
        let filename = format!("{}.wav", Uuid::new_v4().simple());
        let path = self.config.audio_dir.join(&filename);
        tokio::fs::write(&path, &audio).await?;

        tracing::debug!(
            path = %path.display(),
            bytes = audio.len(),
            language = %language,
            "Stored synthesized audio"
        );

        Ok(AudioArtifact {
            url: format!(
                "{}/{}",
                self.config.public_path.trim_end_matches('/'),
                filename
            ),
            language,
        })
    }

    fn supports_language(&self, language: Language) -> bool {
        SUPPORTED.contains(&language)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Synthesizer used when the capability is disabled; returns immediately
/// without attempting work
pub struct DisabledSynthesizer;

impl DisabledSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DisabledSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for DisabledSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _language: Language,
    ) -> Result<AudioArtifact, SynthesisError> {
        Err(SynthesisError::Disabled)
    }

    fn supports_language(&self, _language: Language) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Create synthesizer based on config
pub fn create_synthesizer(config: &TtsConfig) -> Arc<dyn SpeechSynthesizer> {
    match config.provider {
        SpeechProvider::Http => {
            tracing::info!(
                endpoint = %config.endpoint,
                audio_dir = %config.audio_dir,
                "Using HTTP speech synthesizer"
            );
            Arc::new(HttpSpeechSynthesizer::new(HttpSynthesizerConfig {
                endpoint: config.endpoint.clone(),
                audio_dir: PathBuf::from(&config.audio_dir),
                public_path: config.public_path.clone(),
                timeout: Duration::from_secs(config.timeout_seconds),
            }))
        }
        SpeechProvider::Disabled => {
            tracing::info!("Speech synthesis disabled");
            Arc::new(DisabledSynthesizer::new())
        }
    }
}

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        let synth = HttpSpeechSynthesizer::new(HttpSynthesizerConfig::default());
        assert!(synth.supports_language(Language::English));
        assert!(synth.supports_language(Language::Hindi));
        assert!(!synth.supports_language(Language::Punjabi));
    }

    #[tokio::test]
    async fn test_disabled_returns_immediately() {
        let synth = DisabledSynthesizer::new();
        assert!(!synth.is_enabled());
        let result = synth.synthesize("hello", Language::English).await;
        assert!(matches!(result, Err(SynthesisError::Disabled)));
    }

    #[tokio::test]
    async fn test_unsupported_language_rejected_before_any_call() {
        let synth = HttpSpeechSynthesizer::new(HttpSynthesizerConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(100),
            ..Default::default()
        });
        let result = synth.synthesize("hello", Language::Odia).await;
        assert!(matches!(
            result,
            Err(SynthesisError::UnsupportedLanguage(Language::Odia))
        ));
    }

    #[test]
    fn test_create_synthesizer_disabled() {
        let config = TtsConfig {
            provider: SpeechProvider::Disabled,
            ..Default::default()
        };
        let synth = create_synthesizer(&config);
        assert!(!synth.is_enabled());
    }

    #[test]
    fn test_filenames_are_unique() {
        let a = format!("{}.wav", Uuid::new_v4().simple());
        let b = format!("{}.wav", Uuid::new_v4().simple());
        assert_ne!(a, b);
    }
}
