//! Request Metrics Port - Counter Registry Interface
//!
//! Defines what the endpoint handlers need from a counter registry.
//! The Prometheus adapter implements it for production; tests can
//! substitute an isolated registry or a mock.

use crate::domain::counters::{CounterError, CounterSnapshot, RequestCounter};

/// Counter registry shared by all in-flight requests.
///
/// Implementations must tolerate concurrent calls from any number of
/// handlers: `increment` never loses an update and `snapshot` never
/// returns a torn value for a single counter.
pub trait RequestMetrics: Send + Sync + 'static {
  /// Add exactly 1 to the given counter.
  fn increment(&self, counter: RequestCounter);

  /// Add exactly 1 to the counter with the given exposition name.
  ///
  /// Fails with `CounterError::UnknownCounter` for any name that is
  /// not one of the four registered counters.
  fn increment_by_name(&self, name: &str) -> Result<(), CounterError> {
    let counter: RequestCounter = name.parse()?;
    self.increment(counter);
    Ok(())
  }

  /// Read the current value of every counter.
  fn snapshot(&self) -> CounterSnapshot;

  /// Render all counters in the Prometheus text exposition format.
  fn render(&self) -> Result<String, CounterError>;
}
