//! HTTP endpoints
//!
//! REST API for the chat pipeline.

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );

    let audio_service = ServeDir::new(&state.config.tts.audio_dir);
    let public_path = state.config.tts.public_path.clone();

    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .nest_service(&public_path, audio_service)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns a permissive layer (dev only)
/// - If cors_origins is empty, defaults to localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin(
                "http://localhost:3000"
                    .parse::<HeaderValue>()
                    .expect("static origin"),
            )
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Chat request
///
/// Two historical payload shapes are in use; the alternate field names are
/// accepted as aliases and normalized here.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    /// User utterance; may be empty
    #[serde(default, alias = "user_input")]
    message: String,
    /// Language code, defaulting to English
    #[serde(default = "default_language", alias = "source_lang")]
    language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Chat endpoint
///
/// Always answers with a well-formed JSON body: 200 with the assembled
/// reply, or 500 with `{"error": ...}` when the request body cannot be
/// parsed.
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Malformed chat request body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": rejection.body_text() })),
            );
        }
    };

    let reply = state
        .pipeline
        .process(&request.message, &request.language)
        .await;

    (StatusCode::OK, Json(serde_json::to_value(reply).unwrap_or_default()))
}

/// Liveness probe
async fn health_check() -> &'static str {
    "✅ KrishnaSaar backend is running!"
}

/// Readiness probe checking completion backend connectivity
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let llm_url = format!(
        "{}/models",
        state.config.llm.endpoint.trim_end_matches('/')
    );

    let llm_status = match tokio::time::timeout(
        std::time::Duration::from_secs(2),
        reqwest::get(&llm_url),
    )
    .await
    {
        Ok(Ok(resp)) if resp.status().is_success() || resp.status() == StatusCode::UNAUTHORIZED => {
            // 401 still proves the endpoint is reachable
            "ok"
        }
        Ok(Ok(_)) => "error",
        Ok(Err(_)) => "unreachable",
        Err(_) => "timeout",
    };

    let ready = llm_status == "ok";
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": if ready { "ready" } else { "not_ready" },
            "checks": {
                "llm_backend": { "status": llm_status, "url": llm_url }
            }
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_aliases() {
        let canonical: ChatRequest =
            serde_json::from_str(r#"{"message": "hello", "language": "hi"}"#).unwrap();
        assert_eq!(canonical.message, "hello");
        assert_eq!(canonical.language, "hi");

        let alternate: ChatRequest =
            serde_json::from_str(r#"{"user_input": "hello", "source_lang": "te"}"#).unwrap();
        assert_eq!(alternate.message, "hello");
        assert_eq!(alternate.language, "te");
    }

    #[test]
    fn test_request_defaults() {
        let empty: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, "");
        assert_eq!(empty.language, "en");
    }
}
