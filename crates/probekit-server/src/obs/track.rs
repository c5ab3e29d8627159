//! Request-tracking middleware.
//!
//! Wraps every route (fallback included). The recorder sees the start before
//! the handler runs and the end once the response head is produced. If the
//! handler future is dropped (client went away) the end is never recorded,
//! so `totalRequests` can run ahead of the status histogram.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::obs::pretty::ExchangeSummary;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let recorder = state.recorder();
    recorder.on_request_start();

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = res.status();
    recorder.on_request_end(elapsed_ms, status.as_u16());

    tracing::debug!(%method, %path, status = status.as_u16(), elapsed_ms, "request completed");
    if state.cfg().logging.pretty_exchanges {
        let summary = ExchangeSummary { method, path, status, elapsed_ms };
        tracing::info!("\n{summary}");
    }

    res
}
