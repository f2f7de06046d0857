//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use super::AppConfig;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "APP_CONFIG";

/// Default config file location.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Resolve the config path from `APP_CONFIG`, falling back to `config.toml`.
pub fn config_path() -> String {
  std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Load the config file if present, otherwise use built-in defaults.
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_config_or_default(path: &str) -> Result<AppConfig> {
  if Path::new(path).exists() {
    load_config(path)
  } else {
    let config = AppConfig::default();
    validate_config(&config)?;
    Ok(config)
  }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A parseable `ip:port` bind address
/// - A log level the tracing filter accepts
/// - A non-empty service name
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.server.name.trim().is_empty(),
    "server.name must not be empty"
  );

  anyhow::ensure!(
    EnvFilter::try_new(&config.server.log_level).is_ok(),
    "server.log_level is not a valid filter: {}",
    config.server.log_level
  );

  config
    .http
    .bind_address
    .parse::<SocketAddr>()
    .with_context(|| {
      format!(
        "http.bind_address must be ip:port, got {}",
        config.http.bind_address
      )
    })?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::LogFormat;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_missing_file_falls_back_to_defaults() {
    let config = load_config_or_default("nonexistent.toml").unwrap();
    assert_eq!(config.http.bind_address, "0.0.0.0:8000");
    assert_eq!(config.server.log_level, "info");
    assert_eq!(config.server.log_format, LogFormat::Json);
    assert_eq!(config.http.shutdown_timeout_seconds, 5);
  }

  #[test]
  fn test_empty_document_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.server.name, "hello-metrics-server");
    assert_eq!(config.http.bind_address, "0.0.0.0:8000");
  }

  #[test]
  fn test_full_document() {
    let config = parse_config(
      r#"
        [server]
        name = "edge"
        log_level = "debug"
        log_format = "pretty"

        [http]
        bind_address = "127.0.0.1:9000"
        shutdown_timeout_seconds = 10
      "#,
    )
    .unwrap();
    assert_eq!(config.server.name, "edge");
    assert_eq!(config.server.log_format, LogFormat::Pretty);
    assert_eq!(config.http.bind_address, "127.0.0.1:9000");
    assert_eq!(config.http.shutdown_timeout_seconds, 10);
  }

  #[test]
  fn test_rejects_bad_bind_address() {
    let err = parse_config("[http]\nbind_address = \"localhost\"").unwrap_err();
    assert!(format!("{err:#}").contains("bind_address"));
  }

  #[test]
  fn test_rejects_unknown_log_format() {
    assert!(parse_config("[server]\nlog_format = \"xml\"").is_err());
  }
}
