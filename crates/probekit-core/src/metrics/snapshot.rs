use std::collections::BTreeMap;

use serde::Serialize;

/// Point-in-time copy of the recorder state, shaped for the `/metrics` body.
///
/// Status codes are keyed by number; serde_json renders the keys as strings
/// (`{"200": 3}`), and the `BTreeMap` keeps them in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub response_time: ResponseTimeStats,
    pub status_codes: BTreeMap<u16, u64>,
}

impl MetricsSnapshot {
    /// Number of requests that reached completion.
    pub fn completed(&self) -> u64 {
        self.status_codes.values().sum()
    }
}

/// Aggregates over the response-time window, in whole milliseconds.
/// All zero when the window is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseTimeStats {
    pub avg: u64,
    pub min: u64,
    pub max: u64,
    pub samples: usize,
}

impl ResponseTimeStats {
    pub(crate) fn from_window<'a>(window: impl ExactSizeIterator<Item = &'a u64>) -> Self {
        let samples = window.len();
        if samples == 0 {
            return Self::default();
        }

        let mut min = u64::MAX;
        let mut max = 0u64;
        let mut sum: u128 = 0;
        for &ms in window {
            min = min.min(ms);
            max = max.max(ms);
            sum += u128::from(ms);
        }

        // round half up
        let n = samples as u128;
        let avg = ((sum + n / 2) / n) as u64;

        Self { avg, min, max, samples }
    }
}
