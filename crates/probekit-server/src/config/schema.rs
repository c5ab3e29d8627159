use std::net::SocketAddr;

use serde::Deserialize;
use probekit_core::error::{ProbeError, Result};
use probekit_core::metrics::DEFAULT_WINDOW_CAPACITY;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ProbeError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.metrics.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(ProbeError::BadRequest(
                "server.listen must be a valid SocketAddr".into(),
            ));
        }
        if !(1..=16 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(ProbeError::BadRequest(
                "server.max_body_bytes must be between 1 and 16777216".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Response-time samples kept for avg/min/max.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self { window_size: default_window_size() }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=100_000).contains(&self.window_size) {
            return Err(ProbeError::BadRequest(
                "metrics.window_size must be between 1 and 100000".into(),
            ));
        }
        Ok(())
    }
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_CAPACITY
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Log a two-line request/response summary per exchange at info level.
    #[serde(default)]
    pub pretty_exchanges: bool,
}
