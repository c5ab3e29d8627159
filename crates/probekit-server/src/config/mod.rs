//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::net::SocketAddr;

use probekit_core::error::{ProbeError, Result};

pub use schema::{LoggingSection, MetricsSection, ServerConfig, ServerSection};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "PROBEKIT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "probekit.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ProbeError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| ProbeError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, falling back to defaults when the file does not exist.
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%path, "config file not found, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(ProbeError::Internal(format!("read config failed: {e}"))),
    }
}

/// Resolve the listen address, letting a `PORT` value override the port.
pub fn resolve_listen(cfg: &ServerConfig, port_override: Option<&str>) -> Result<SocketAddr> {
    let mut addr: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|e| ProbeError::BadRequest(format!("server.listen is not a SocketAddr: {e}")))?;

    if let Some(p) = port_override {
        let port: u16 = p
            .trim()
            .parse()
            .map_err(|e| ProbeError::BadRequest(format!("PORT must be a port number: {e}")))?;
        addr.set_port(port);
    }
    Ok(addr)
}
