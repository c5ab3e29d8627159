use std::fmt;

use axum::http::{Method, StatusCode};

/// Human-readable request/response pair:
///
/// ```text
/// --> GET /status
/// <-- 200 OK (3 ms)
/// ```
#[derive(Debug, Clone)]
pub struct ExchangeSummary {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub elapsed_ms: u64,
}

impl fmt::Display for ExchangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--> {} {}", self.method, self.path)?;
        write!(f, "<-- {}", self.status.as_u16())?;
        if let Some(reason) = self.status.canonical_reason() {
            write!(f, " {reason}")?;
        }
        write!(f, " ({} ms)", self.elapsed_ms)
    }
}
