//! HTTP mapping for `ProbeError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use probekit_core::error::{ClientCode, ProbeError};

/// `ProbeError` as an axum response: `{"error":{"code","message"}}`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ProbeError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": {
                "code": self.0.client_code().as_str(),
                "message": self.0.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
