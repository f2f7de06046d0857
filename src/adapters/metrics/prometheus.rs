//! Prometheus Metrics Registry - Request Counters
//!
//! Owns the four request counters in a private Prometheus registry and
//! renders them in the text exposition format for `/metrics` scrapes.
//! A registry per instance (never the process-global default) keeps
//! test instances isolated from each other.

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use tracing::debug;

use crate::domain::counters::{CounterError, CounterSnapshot, RequestCounter};
use crate::ports::request_metrics::RequestMetrics;

/// Content type of the rendered exposition body.
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Centralized request counters for the web server.
///
/// Counters are `IntCounter`s backed by atomic integers, so increments
/// from concurrent handlers never lose updates and need no lock.
pub struct MetricsRegistry {
    /// Prometheus registry.
    registry: Registry,
    /// Every request served.
    total: IntCounter,
    /// Requests to `/health`.
    healthcheck: IntCounter,
    /// Requests to `/`.
    main: IntCounter,
    /// Requests to `/bye`.
    bye: IntCounter,
}

impl MetricsRegistry {
    /// Create and register all four counters, each starting at 0.
    pub fn new() -> Result<Self, CounterError> {
        let registry = Registry::new();

        let total = register(&registry, RequestCounter::Total)?;
        let healthcheck = register(&registry, RequestCounter::Healthcheck)?;
        let main = register(&registry, RequestCounter::Main)?;
        let bye = register(&registry, RequestCounter::Bye)?;

        Ok(Self {
            registry,
            total,
            healthcheck,
            main,
            bye,
        })
    }

    /// Reset every counter to 0.
    ///
    /// Test setup only. No route reaches this.
    pub fn reset(&self) {
        for counter in RequestCounter::ALL {
            self.counter(counter).reset();
        }
        debug!("Request counters reset");
    }

    fn counter(&self, counter: RequestCounter) -> &IntCounter {
        match counter {
            RequestCounter::Total => &self.total,
            RequestCounter::Healthcheck => &self.healthcheck,
            RequestCounter::Main => &self.main,
            RequestCounter::Bye => &self.bye,
        }
    }
}

fn register(registry: &Registry, counter: RequestCounter) -> Result<IntCounter, CounterError> {
    let c = IntCounter::new(counter.name(), counter.help())?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl RequestMetrics for MetricsRegistry {
    fn increment(&self, counter: RequestCounter) {
        self.counter(counter).inc();
    }

    fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total: self.total.get(),
            healthcheck: self.healthcheck.get(),
            main: self.main.get(),
            bye: self.bye.get(),
        }
    }

    fn render(&self) -> Result<String, CounterError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
