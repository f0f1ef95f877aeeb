//! Translation providers
//!
//! `LibreTranslator` talks to a LibreTranslate-compatible HTTP server run
//! as a sidecar. `NoopTranslator` is selected when the capability is
//! disabled; the decision is made once at startup and injected.
//!
//! Policy: translation is attempted whenever source != target. There is no
//! allow-list of languages.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use saar_config::{TranslationConfig, TranslationProvider};
use saar_core::{Language, TranslationOutcome, Translator};

/// Configuration for the LibreTranslate client
#[derive(Debug, Clone)]
pub struct LibreTranslatorConfig {
    /// Server endpoint base (e.g. http://127.0.0.1:5000)
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for LibreTranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for a LibreTranslate-compatible server
pub struct LibreTranslator {
    config: LibreTranslatorConfig,
    client: Client,
}

impl LibreTranslator {
    pub fn new(config: LibreTranslatorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.config.endpoint.trim_end_matches('/'))
    }

    async fn request(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, String> {
        let request = TranslateRequest {
            q: text,
            source: from.code(),
            target: to.code(),
            format: "text",
        };

        let response = self
            .client
            .post(self.translate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {}: {}", status, body));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| format!("malformed response: {}", e))?;

        Ok(body.translated_text)
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> TranslationOutcome {
        // Pass-through cases carry no network call
        if text.trim().is_empty() || from == to {
            return TranslationOutcome::Translated(text.to_string());
        }

        match self.request(text, from, to).await {
            Ok(translated) => TranslationOutcome::Translated(translated),
            Err(e) => {
                tracing::warn!(
                    from = %from,
                    to = %to,
                    error = %e,
                    "Translation failed, passing text through"
                );
                TranslationOutcome::Failed
            }
        }
    }

    fn name(&self) -> &str {
        "libretranslate"
    }
}

/// Pass-through translator used when the capability is disabled
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> TranslationOutcome {
        if text.trim().is_empty() || from == to {
            return TranslationOutcome::Translated(text.to_string());
        }
        TranslationOutcome::Unavailable
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Create translator based on config
pub fn create_translator(config: &TranslationConfig) -> Arc<dyn Translator> {
    match config.provider {
        TranslationProvider::Libre => {
            tracing::info!(endpoint = %config.endpoint, "Using LibreTranslate translator");
            Arc::new(LibreTranslator::new(LibreTranslatorConfig {
                endpoint: config.endpoint.clone(),
                timeout: Duration::from_secs(config.timeout_seconds),
            }))
        }
        TranslationProvider::Disabled => {
            tracing::info!("Translation disabled, using pass-through");
            Arc::new(NoopTranslator::new())
        }
    }
}

// LibreTranslate API types
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}
