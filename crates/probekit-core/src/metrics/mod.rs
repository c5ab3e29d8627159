//! In-process request metrics.
//!
//! One [`RequestRecorder`] is owned by the server's composition root and
//! shared by reference with the request-tracking middleware. Reads go through
//! [`RequestRecorder::snapshot`], which returns a serializable copy.

pub mod recorder;
pub mod snapshot;

pub use recorder::{RequestRecorder, DEFAULT_WINDOW_CAPACITY};
pub use snapshot::{MetricsSnapshot, ResponseTimeStats};
