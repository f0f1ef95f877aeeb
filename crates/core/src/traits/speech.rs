//! Speech synthesis trait

use crate::Language;
use async_trait::async_trait;
use thiserror::Error;

/// A stored audio rendering of a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    /// Relative URL the artifact is served from
    pub url: String,
    /// Language the audio was rendered in
    pub language: Language,
}

/// Synthesis errors
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Synthesis is disabled")]
    Disabled,

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(Language),

    #[error("Synthesis backend error: {0}")]
    Backend(String),

    #[error("Failed to store audio: {0}")]
    Io(#[from] std::io::Error),
}

/// Text-to-speech interface
///
/// Synthesis is best-effort: an error never blocks delivery of the textual
/// response. The caller logs the error and omits the audio reference.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + 'static {
    /// Render `text` in `language` to a stored audio artifact
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<AudioArtifact, SynthesisError>;

    /// Whether this synthesizer can render the given language
    fn supports_language(&self, language: Language) -> bool;

    /// Whether the capability is enabled at all
    fn is_enabled(&self) -> bool;
}
