//! Translation, speech rendering and chat orchestration
//!
//! The `ChatPipeline` sequences the per-request flow:
//! translate to English -> persona completion -> translate back ->
//! best-effort speech rendering. Every stage except the completion is
//! degradable; only a completion failure changes the response content.

pub mod orchestrator;
pub mod translate;
pub mod tts;

pub use orchestrator::{ChatPipeline, ChatReply, FALLBACK_ANSWER, FALLBACK_ENGLISH_REFERENCE};
pub use translate::{create_translator, LibreTranslator, LibreTranslatorConfig, NoopTranslator};
pub use tts::{
    create_synthesizer, DisabledSynthesizer, HttpSpeechSynthesizer, HttpSynthesizerConfig,
};
