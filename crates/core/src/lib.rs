//! Core traits and types for the KrishnaSaar backend
//!
//! This crate provides the foundational types used across all other crates:
//! - Language definitions and code parsing
//! - Pluggable backend traits (translation, speech synthesis)
//! - Explicit outcome types for best-effort stages

pub mod language;
pub mod traits;

pub use language::Language;
pub use traits::{
    AudioArtifact, SpeechSynthesizer, SynthesisError, TranslationOutcome, Translator,
};
