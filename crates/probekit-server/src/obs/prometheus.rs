//! Prometheus text exposition of a [`MetricsSnapshot`].

use std::fmt::Write;

use probekit_core::metrics::MetricsSnapshot;

pub fn render(snap: &MetricsSnapshot, draining: bool) -> String {
    let mut out = String::new();
    let rt = &snap.response_time;

    let _ = writeln!(out, "# TYPE probekit_requests_total counter");
    let _ = writeln!(out, "probekit_requests_total {}", snap.total_requests);

    let _ = writeln!(out, "# TYPE probekit_response_time_ms gauge");
    for (stat, v) in [("avg", rt.avg), ("min", rt.min), ("max", rt.max)] {
        let _ = writeln!(out, "probekit_response_time_ms{{stat=\"{stat}\"}} {v}");
    }

    let _ = writeln!(out, "# TYPE probekit_response_time_samples gauge");
    let _ = writeln!(out, "probekit_response_time_samples {}", rt.samples);

    let _ = writeln!(out, "# TYPE probekit_responses_total counter");
    for (code, n) in &snap.status_codes {
        let _ = writeln!(out, "probekit_responses_total{{code=\"{code}\"}} {n}");
    }

    let _ = writeln!(out, "# TYPE probekit_draining gauge\nprobekit_draining {}", u8::from(draining));
    out
}
