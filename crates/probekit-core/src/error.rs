//! Shared error type across probekit crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed body.
    BadRequest,
    /// Body exceeds the configured limit.
    PayloadTooLarge,
    /// No route matched.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: usize },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ProbeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ProbeError::BadRequest(_) => ClientCode::BadRequest,
            ProbeError::PayloadTooLarge { .. } => ClientCode::PayloadTooLarge,
            ProbeError::NotFound(_) => ClientCode::NotFound,
            ProbeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ProbeError::Internal(_) => ClientCode::Internal,
        }
    }
}
