//! Request counters - the fixed set of tracked metrics.
//!
//! Every counter the service exposes is a variant of `RequestCounter`.
//! Names and help texts are part of the exposition contract scraped by
//! Prometheus, so they are fixed here and nowhere else.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised by the counter registry.
#[derive(Debug, Error)]
pub enum CounterError {
    /// A counter name outside the four registered ones was referenced.
    #[error("unknown counter: {0}")]
    UnknownCounter(String),

    /// The Prometheus client rejected a registration or failed to encode.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    /// The text encoder produced bytes that are not valid UTF-8.
    #[error("metrics output is not UTF-8: {0}")]
    Encode(#[from] std::string::FromUtf8Error),
}

/// One of the four monotonic request counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestCounter {
    /// Every request served, `/metrics` included.
    Total,
    /// Requests to `/health`.
    Healthcheck,
    /// Requests to `/`.
    Main,
    /// Requests to `/bye`.
    Bye,
}

impl RequestCounter {
    /// All counters, in registration order.
    pub const ALL: [Self; 4] = [Self::Total, Self::Healthcheck, Self::Main, Self::Bye];

    /// Exposition name of the counter.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Total => "server_requests_total",
            Self::Healthcheck => "healthcheck_requests_total",
            Self::Main => "main_requests_total",
            Self::Bye => "bye_requests_total",
        }
    }

    /// `# HELP` text of the counter.
    pub const fn help(self) -> &'static str {
        match self {
            Self::Total => "Total number of requests to this webserver",
            Self::Healthcheck => "Total number of requests to healthcheck",
            Self::Main => "Total number of requests to main endpoint",
            Self::Bye => "Total number of requests to bye endpoint",
        }
    }
}

impl fmt::Display for RequestCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RequestCounter {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CounterError::UnknownCounter(s.to_string()))
    }
}

/// Point-in-time read of all four counters.
///
/// Each value is read atomically on its own; the four reads are not
/// taken at a single instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub total: u64,
    pub healthcheck: u64,
    pub main: u64,
    pub bye: u64,
}

impl CounterSnapshot {
    /// Value of a single counter in this snapshot.
    pub const fn get(&self, counter: RequestCounter) -> u64 {
        match counter {
            RequestCounter::Total => self.total,
            RequestCounter::Healthcheck => self.healthcheck,
            RequestCounter::Main => self.main,
            RequestCounter::Bye => self.bye,
        }
    }
}
