//! Endpoint Use Cases - Count, Then Respond
//!
//! One function per route. Each bumps the total counter plus its own
//! counter and only then builds the response, so both increments are
//! visible before any client sees a reply. Transport concerns (status
//! codes, content types) stay in `crate::adapters::http`.

use tracing::{debug, instrument};

use crate::domain::counters::{CounterError, RequestCounter};
use crate::domain::responses::{HealthStatus, Message};
use crate::ports::request_metrics::RequestMetrics;

/// `/health`: total + healthcheck.
#[instrument(level = "debug", skip(metrics))]
pub fn health(metrics: &dyn RequestMetrics) -> HealthStatus {
  count(metrics, RequestCounter::Healthcheck);
  HealthStatus::ok()
}

/// `/`: total + main.
#[instrument(level = "debug", skip(metrics))]
pub fn main(metrics: &dyn RequestMetrics) -> Message {
  count(metrics, RequestCounter::Main);
  Message::hello()
}

/// `/bye`: total + bye.
#[instrument(level = "debug", skip(metrics))]
pub fn bye(metrics: &dyn RequestMetrics) -> Message {
  count(metrics, RequestCounter::Bye);
  Message::bye()
}

/// `/metrics`: the exposition body, then total only.
///
/// Rendering happens before the self-increment, so a scrape shows up
/// in `server_requests_total` from the next scrape on.
#[instrument(level = "debug", skip(metrics))]
pub fn metrics(metrics: &dyn RequestMetrics) -> Result<String, CounterError> {
  let body = metrics.render();
  metrics.increment(RequestCounter::Total);
  body
}

fn count(metrics: &dyn RequestMetrics, endpoint: RequestCounter) {
  metrics.increment(RequestCounter::Total);
  metrics.increment(endpoint);
  debug!(counter = %endpoint, "Request counted");
}
