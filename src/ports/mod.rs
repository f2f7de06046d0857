//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `RequestMetrics`: Request counter registry and exposition

pub mod request_metrics;

pub use request_metrics::RequestMetrics;
