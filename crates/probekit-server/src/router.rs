//! Axum router wiring.
//!
//! Every route, the 404 fallback included, runs inside the tracking
//! middleware, so the recorder sees all traffic.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().server.max_body_bytes;

    Router::new()
        .route("/status", get(ops::status))
        .route("/health", get(ops::health))
        .route("/live", get(ops::live))
        .route("/ready", get(ops::ready))
        .route("/version", get(ops::version))
        .route("/metrics", get(ops::metrics))
        .route("/metrics/prometheus", get(ops::metrics_prometheus))
        .route(
            "/api/echo",
            post(api::echo::echo).layer(DefaultBodyLimit::max(max_body)),
        )
        .route("/joke", get(api::jokes::joke))
        .route("/teapot", get(api::jokes::teapot))
        .fallback(ops::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track::track_requests,
        ))
        .with_state(state)
}
