//! Top-level facade crate for probekit.
//!
//! Re-exports the recorder core and the server library so users can depend on a single crate.

pub mod core {
    pub use probekit_core::*;
}

pub mod server {
    pub use probekit_server::*;
}
