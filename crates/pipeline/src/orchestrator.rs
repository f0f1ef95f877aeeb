//! Chat pipeline orchestrator
//!
//! Sequences one request end-to-end:
//! translate to English -> persona completion -> translate back to the
//! user's language -> best-effort speech rendering. Each stage's output is
//! the next stage's input; every outbound call is attempted exactly once.
//!
//! Only a completion failure is fatal to the request, because no answer
//! exists to translate or speak. It short-circuits to a fixed fallback
//! reply; translation and synthesis failures degrade silently to
//! pass-through and missing audio.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use saar_core::{Language, SpeechSynthesizer, Translator};
use saar_llm::{persona_messages, LlmBackend};

/// English reference substituted when the model yields no answer
pub const FALLBACK_ENGLISH_REFERENCE: &str = "Sorry, the model didn't return a proper response.";

/// User-facing text substituted when the model yields no answer
pub const FALLBACK_ANSWER: &str = "Translation failed";

/// The assembled reply; always well-formed, even on partial failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    /// Relative URL of the synthesized audio, or empty when unavailable
    pub audio_url: String,
    /// Untranslated model answer; the client's English fallback
    pub english_reference: String,
    /// Answer in the user's language
    pub text_response: String,
}

/// End-to-end chat pipeline
pub struct ChatPipeline {
    translator: Arc<dyn Translator>,
    llm: Arc<dyn LlmBackend>,
    tts: Arc<dyn SpeechSynthesizer>,
}

impl ChatPipeline {
    pub fn new(
        translator: Arc<dyn Translator>,
        llm: Arc<dyn LlmBackend>,
        tts: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            translator,
            llm,
            tts,
        }
    }

    /// Process one user turn
    ///
    /// `language` is the raw request-supplied code; blank or unrecognized
    /// codes resolve to English.
    pub async fn process(&self, message: &str, language: &str) -> ChatReply {
        let lang = Language::resolve(language);

        tracing::info!(message = %message, language = %lang, "Processing chat request");

        // Step 1: normalize the input to English
        let input_english = self
            .translator
            .translate(message, lang, Language::English)
            .await
            .unwrap_or_original(message);

        tracing::info!(text = %input_english, "English-normalized input");

        // Step 2: persona completion; the only stage whose failure is fatal
        let messages = persona_messages(&input_english);
        let answer = match self.llm.generate(&messages).await {
            Ok(result) => {
                tracing::info!(
                    model = %self.llm.model_name(),
                    elapsed_ms = result.total_time_ms,
                    "Model answered"
                );
                result.text
            }
            Err(e) => {
                tracing::error!(model = %self.llm.model_name(), error = %e, "Model call failed");
                return ChatReply {
                    audio_url: String::new(),
                    english_reference: FALLBACK_ENGLISH_REFERENCE.to_string(),
                    text_response: FALLBACK_ANSWER.to_string(),
                };
            }
        };

        // Step 3: translate the answer back to the user's language. The
        // English reference is kept untranslated.
        let text_response = self
            .translator
            .translate(&answer, Language::English, lang)
            .await
            .unwrap_or_original(&answer);

        tracing::info!(language = %lang, text = %text_response, "Translated response");

        // Step 4: best-effort audio; fall back to English when the
        // renderer does not know the user's language
        let synth_lang = if self.tts.supports_language(lang) {
            lang
        } else {
            Language::English
        };

        let audio_url = match self.tts.synthesize(&text_response, synth_lang).await {
            Ok(artifact) => artifact.url,
            Err(e) => {
                tracing::warn!(language = %synth_lang, error = %e, "Synthesis unavailable");
                String::new()
            }
        };

        ChatReply {
            audio_url,
            english_reference: answer,
            text_response,
        }
    }
}
