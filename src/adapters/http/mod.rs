//! HTTP Adapters
//!
//! axum router and server wiring the endpoint use cases to GET routes.

pub mod server;

pub use server::{HttpServer, SharedMetrics, router};
