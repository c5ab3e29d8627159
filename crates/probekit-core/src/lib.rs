//! probekit core: the request metrics recorder and the shared error surface.
//!
//! This crate carries no transport or runtime dependencies. The HTTP layer in
//! `probekit-server` drives the recorder; anything else that can observe a
//! request start and a request end can drive it the same way.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The recorder never fails; recording happens on every request path and
//! must not take a request down with it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{Result, ProbeError};
