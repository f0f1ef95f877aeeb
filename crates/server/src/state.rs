//! Application state
//!
//! Shared across all handlers. Backends are chosen once at startup from
//! configuration and injected into the pipeline; there is no per-request
//! capability detection.

use std::sync::Arc;

use saar_config::Settings;
use saar_llm::{LlmError, TogetherBackend, TogetherConfig};
use saar_pipeline::{create_synthesizer, create_translator, ChatPipeline};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// The end-to-end chat pipeline
    pub pipeline: Arc<ChatPipeline>,
    /// Loaded configuration
    pub config: Arc<Settings>,
}

impl AppState {
    /// Build state from loaded settings, constructing all backends
    pub fn from_settings(settings: Settings) -> Result<Self, LlmError> {
        let translator = create_translator(&settings.translation);
        let tts = create_synthesizer(&settings.tts);
        let llm = Arc::new(TogetherBackend::new(TogetherConfig::from_settings(
            &settings.llm,
        ))?);

        let pipeline = Arc::new(ChatPipeline::new(translator, llm, tts));

        Ok(Self {
            pipeline,
            config: Arc::new(settings),
        })
    }

    /// Build state around an existing pipeline (used by tests)
    pub fn with_pipeline(settings: Settings, pipeline: Arc<ChatPipeline>) -> Self {
        Self {
            pipeline,
            config: Arc::new(settings),
        }
    }
}
