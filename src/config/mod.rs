//! Configuration Module - TOML-based Server Configuration
//!
//! Loads and validates configuration from `config.toml`. Every section
//! and field has a default, so an absent file or an empty table still
//! yields a runnable server.

pub mod loader;

use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Service identity and logging.
  #[serde(default)]
  pub server: ServerConfig,
  /// HTTP listener settings.
  #[serde(default)]
  pub http: HttpConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Human-readable service name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Log output format.
  #[serde(default)]
  pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// One JSON object per line.
  #[default]
  Json,
  /// Human-readable multi-line output.
  Pretty,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
  /// Listener bind address.
  #[serde(default = "default_bind_address")]
  pub bind_address: String,
  /// Time allowed for in-flight requests after a shutdown signal.
  #[serde(default = "default_shutdown_timeout")]
  pub shutdown_timeout_seconds: u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      log_format: LogFormat::default(),
    }
  }
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      bind_address: default_bind_address(),
      shutdown_timeout_seconds: default_shutdown_timeout(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "hello-metrics-server".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_bind_address() -> String {
  "0.0.0.0:8000".to_string()
}

fn default_shutdown_timeout() -> u64 {
  5
}
