//! Translation trait and outcome type

use crate::Language;
use async_trait::async_trait;

/// Result of a translation attempt
///
/// Translation is strictly best-effort: the pipeline passes the original
/// text through on `Unavailable` and `Failed`, so neither variant carries
/// an error the caller must handle. Failures are logged where they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Translation succeeded
    Translated(String),
    /// The capability is disabled in this process
    Unavailable,
    /// The attempt was made and errored
    Failed,
}

impl TranslationOutcome {
    /// Unwrap the translated text, falling back to the original on
    /// `Unavailable` or `Failed`
    pub fn unwrap_or_original(self, original: &str) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::Unavailable | TranslationOutcome::Failed => original.to_string(),
        }
    }
}

/// Bidirectional text translation
///
/// Implementations must return `Translated(text)` unchanged and without any
/// external call when the input is blank or `from == to`.
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translate `text` from `from` to `to`
    async fn translate(&self, text: &str, from: Language, to: Language) -> TranslationOutcome;

    /// Provider name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_or_original() {
        let translated = TranslationOutcome::Translated("नमस्ते".to_string());
        assert_eq!(translated.unwrap_or_original("hello"), "नमस्ते");

        assert_eq!(
            TranslationOutcome::Unavailable.unwrap_or_original("hello"),
            "hello"
        );
        assert_eq!(
            TranslationOutcome::Failed.unwrap_or_original("hello"),
            "hello"
        );
    }
}
