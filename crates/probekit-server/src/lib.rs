//! probekit server library entry.
//!
//! Wires config, shared state, the request-tracking middleware, and the ops
//! and API handlers into one axum router. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
