//! Request observation: tracking middleware, exchange pretty-printer, and
//! Prometheus text rendering of the recorder snapshot.

pub mod pretty;
pub mod prometheus;
pub mod track;
