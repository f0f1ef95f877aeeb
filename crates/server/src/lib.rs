//! HTTP server for the KrishnaSaar backend
//!
//! One POST endpoint drives the chat pipeline; generated audio is served
//! read-only from a static path. The response body is always well-formed
//! JSON, even on failure.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;
