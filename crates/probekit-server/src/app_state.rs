//! Shared application state for the probekit server.
//!
//! This is the composition root: the request recorder is built here from
//! config and handed out by `Arc`, so handlers and middleware share one
//! instance without a process-wide global.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use probekit_core::metrics::RequestRecorder;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    recorder: Arc<RequestRecorder>,
}

struct AppStateInner {
    cfg: ServerConfig,
    started_at: Instant,
    draining: AtomicBool,
    joke_cursor: AtomicUsize,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        let recorder = Arc::new(RequestRecorder::with_capacity(cfg.metrics.window_size));
        tracing::debug!(window = recorder.capacity(), "request recorder ready");

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                started_at: Instant::now(),
                draining: AtomicBool::new(false),
                joke_cursor: AtomicUsize::new(0),
            }),
            recorder,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn recorder(&self) -> Arc<RequestRecorder> {
        Arc::clone(&self.recorder)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }

    /// Mark draining state; `/ready` starts answering 503.
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }

    /// Advance the joke rotation and return the previous position.
    pub fn next_joke_index(&self) -> usize {
        self.inner.joke_cursor.fetch_add(1, Ordering::Relaxed)
    }
}
