//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates the domain types with the `RequestMetrics` port.
//!
//! Use cases:
//! - `endpoints`: per-route counting and fixed responses

pub mod endpoints;
