//! HTTP API tests
//!
//! Drive the router directly with `tower::ServiceExt::oneshot` against
//! stubbed pipeline backends; no sockets or external services involved.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use saar_config::Settings;
use saar_core::{
    AudioArtifact, Language, SpeechSynthesizer, SynthesisError, TranslationOutcome, Translator,
};
use saar_llm::{GenerationResult, LlmBackend, LlmError, Message};
use saar_pipeline::ChatPipeline;
use saar_server::{create_router, AppState};

struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> TranslationOutcome {
        TranslationOutcome::Translated(text.to_string())
    }

    fn name(&self) -> &str {
        "echo"
    }
}

struct FixedLlm {
    answer: &'static str,
}

#[async_trait]
impl LlmBackend for FixedLlm {
    async fn generate(&self, _messages: &[Message]) -> Result<GenerationResult, LlmError> {
        Ok(GenerationResult {
            text: self.answer.to_string(),
            total_time_ms: 1,
        })
    }

    fn model_name(&self) -> &str {
        "fixed"
    }
}

struct SilentTts;

#[async_trait]
impl SpeechSynthesizer for SilentTts {
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

fn test_app() -> axum::Router {
    let pipeline = Arc::new(ChatPipeline::new(
        Arc::new(EchoTranslator),
        Arc::new(FixedLlm {
            answer: "Peace comes from within.",
        }),
        Arc::new(SilentTts),
    ));
    let state = AppState::with_pipeline(Settings::default(), pipeline);
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_canonical_payload() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"message": "What is dharma?", "language": "en"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["english_reference"], "Peace comes from within.");
    assert_eq!(json["text_response"], "Peace comes from within.");
    assert_eq!(json["audio_url"], "");
}

#[tokio::test]
async fn test_chat_alternate_payload_shape() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"user_input": "What is dharma?", "source_lang": "hi"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["english_reference"], "Peace comes from within.");
    assert_eq!(json["text_response"], "Peace comes from within.");
}

#[tokio::test]
async fn test_chat_empty_body_uses_defaults() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["english_reference"], "Peace comes from within.");
}

#[tokio::test]
async fn test_chat_malformed_body_is_json_error() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("KrishnaSaar backend is running!"));
}
