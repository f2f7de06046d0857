//! Domain layer - Counter identities and response payloads.
//!
//! Pure types with no I/O. The registry that stores counter values
//! lives in `crate::adapters::metrics`; handlers only ever name
//! counters through `RequestCounter`.

pub mod counters;
pub mod responses;

// Re-export core types for convenience
pub use counters::{CounterError, CounterSnapshot, RequestCounter};
pub use responses::{HealthStatus, Message};
