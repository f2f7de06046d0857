//! Metrics Adapters
//!
//! Prometheus-backed implementation of the `RequestMetrics` port.

pub mod prometheus;

pub use self::prometheus::{CONTENT_TYPE, MetricsRegistry};
