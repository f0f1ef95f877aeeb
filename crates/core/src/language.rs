//! Language definitions
//!
//! Short ISO-style codes select the natural language used for translation
//! and speech synthesis. Unknown or blank codes normalize to English at the
//! HTTP boundary.

use std::fmt;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Hindi,
    Telugu,
    Tamil,
    Bengali,
    Marathi,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Odia,
}

impl Language {
    /// ISO 639-1 code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
            Language::Tamil => "ta",
            Language::Bengali => "bn",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
            Language::Kannada => "kn",
            Language::Malayalam => "ml",
            Language::Punjabi => "pa",
            Language::Odia => "or",
        }
    }

    /// Parse a language code or full name, case-insensitive
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "hi" | "hindi" => Some(Language::Hindi),
            "te" | "telugu" => Some(Language::Telugu),
            "ta" | "tamil" => Some(Language::Tamil),
            "bn" | "bengali" => Some(Language::Bengali),
            "mr" | "marathi" => Some(Language::Marathi),
            "gu" | "gujarati" => Some(Language::Gujarati),
            "kn" | "kannada" => Some(Language::Kannada),
            "ml" | "malayalam" => Some(Language::Malayalam),
            "pa" | "punjabi" => Some(Language::Punjabi),
            "or" | "odia" | "oriya" => Some(Language::Odia),
            _ => None,
        }
    }

    /// Resolve a request-supplied code, defaulting to English for blank or
    /// unrecognized input
    pub fn resolve(s: &str) -> Self {
        Self::from_str_loose(s).unwrap_or(Language::English)
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }

    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Hindi,
            Language::Telugu,
            Language::Tamil,
            Language::Bengali,
            Language::Marathi,
            Language::Gujarati,
            Language::Kannada,
            Language::Malayalam,
            Language::Punjabi,
            Language::Odia,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_str_loose(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_loose_parsing() {
        assert_eq!(Language::from_str_loose("EN"), Some(Language::English));
        assert_eq!(Language::from_str_loose(" hindi "), Some(Language::Hindi));
        assert_eq!(Language::from_str_loose("Telugu"), Some(Language::Telugu));
        assert_eq!(Language::from_str_loose("oriya"), Some(Language::Odia));
        assert_eq!(Language::from_str_loose("xx"), None);
    }

    #[test]
    fn test_resolve_defaults_to_english() {
        assert_eq!(Language::resolve(""), Language::English);
        assert_eq!(Language::resolve("klingon"), Language::English);
        assert_eq!(Language::resolve("hi"), Language::Hindi);
    }
}
