//! Operational HTTP endpoints.
//!
//! - `/status`  : plain "ok" probe
//! - `/health`  : health + uptime
//! - `/live`    : liveness
//! - `/ready`   : readiness (503 when draining)
//! - `/version` : crate name + version
//! - `/metrics` : recorder snapshot (JSON), `/metrics/prometheus` for text format

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use probekit_core::error::ProbeError;
use probekit_core::metrics::MetricsSnapshot;

use crate::{app_state::AppState, error::ApiError, obs};

pub async fn status() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "uptimeSecs": state.uptime_secs(),
    }))
}

pub async fn live() -> impl IntoResponse {
    Json(json!({ "status": "alive" }))
}

pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "draining" })))
    } else {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    }
}

pub async fn version() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.recorder().snapshot())
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> Response {
    let body = obs::prometheus::render(&state.recorder().snapshot(), state.is_draining());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError(ProbeError::NotFound(uri.path().to_string()))
}
