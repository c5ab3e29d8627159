use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};

use probekit_core::error::ProbeError;

use crate::{app_state::AppState, error::ApiError};

/// `POST /api/echo`: return the JSON body with a receive timestamp.
///
/// The body is taken raw so that size and parse failures surface as our own
/// JSON errors instead of axum's plain-text rejections.
pub async fn echo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map_err(|rej| {
        if rej.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ProbeError::PayloadTooLarge { limit: state.cfg().server.max_body_bytes }
        } else {
            ProbeError::BadRequest(rej.body_text())
        }
    })?;

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ProbeError::BadRequest(format!("invalid json: {e}")))?;

    let received_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    Ok(Json(json!({
        "echo": payload,
        "receivedAt": received_at,
    })))
}
