//! Backend traits
//!
//! The pipeline talks to its external collaborators through these traits so
//! implementations can be swapped by configuration and mocked in tests:
//!
//! - `Translator`: best-effort text translation with explicit outcomes
//! - `SpeechSynthesizer`: text-to-audio rendering producing stored artifacts

mod speech;
mod translate;

pub use speech::{AudioArtifact, SpeechSynthesizer, SynthesisError};
pub use translate::{TranslationOutcome, Translator};
