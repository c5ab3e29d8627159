//! Rolling request recorder.
//!
//! - `total_requests`: atomic, bumped once at request start
//! - response-time window: bounded FIFO behind a mutex
//! - status histogram: `DashMap` of atomic counters, bumped at request end
//!
//! The three are updated independently, so a snapshot taken while requests
//! are in flight may be torn across fields. Each field on its own never loses
//! an update and the window never exceeds its capacity.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;

use super::snapshot::{MetricsSnapshot, ResponseTimeStats};

/// Number of response-time samples kept by default.
pub const DEFAULT_WINDOW_CAPACITY: usize = 1000;

#[derive(Debug)]
pub struct RequestRecorder {
    total_requests: AtomicU64,
    window: Mutex<VecDeque<u64>>,
    capacity: usize,
    status_codes: DashMap<u16, AtomicU64>,
}

impl Default for RequestRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestRecorder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WINDOW_CAPACITY)
    }

    /// Build a recorder keeping the last `capacity` samples (min 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            total_requests: AtomicU64::new(0),
            window: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            status_codes: DashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Count an inbound request. Call once, before handling.
    pub fn on_request_start(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed request. Status codes are stored as given, even
    /// outside 100..=599.
    pub fn on_request_end(&self, duration_ms: u64, status_code: u16) {
        {
            let mut window = self.window();
            if window.len() == self.capacity {
                window.pop_front();
            }
            window.push_back(duration_ms);
        }

        self.status_codes
            .entry(status_code)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let total_requests = self.total_requests();
        let response_time = {
            let window = self.window();
            ResponseTimeStats::from_window(window.iter())
        };
        let status_codes = self
            .status_codes
            .iter()
            .map(|r| (*r.key(), r.value().load(Ordering::Relaxed)))
            .collect();

        MetricsSnapshot {
            total_requests,
            response_time,
            status_codes,
        }
    }

    // A poisoned window still holds valid samples.
    fn window(&self) -> MutexGuard<'_, VecDeque<u64>> {
        self.window.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
