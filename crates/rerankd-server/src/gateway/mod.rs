//! HTTP gateway (Axum) for relevance scoring.
//!
//! This module is primarily used by the `rerankd` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::rerank_handler;
pub use state::HandlerState;

/// Response header carrying the gateway's own status alongside the HTTP code.
pub const RERANKD_STATUS_HEADER: &str = "x-rerankd-status";

pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_READY: &str = "ready";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/rerank", post(rerank_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub model: &'static str,
    pub model_mode: &'static str,
}

fn gateway_status(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(RERANKD_STATUS_HEADER, HeaderValue::from_static(value));
    headers
}

/// Constant-time liveness probe. The model loads before the listener binds,
/// so a reachable server implies load already completed.
#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        gateway_status(STATUS_HEALTHY),
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let components = ComponentStatus {
        http: STATUS_READY,
        model: STATUS_READY,
        model_mode: if state.scorer.is_model_loaded() {
            "real"
        } else {
            "stub"
        },
    };

    (
        StatusCode::OK,
        gateway_status("ok"),
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
