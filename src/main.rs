//! Hello Metrics Server — Entry Point
//!
//! Initializes configuration, logging and the request counter
//! registry, then serves HTTP until SIGINT/SIGTERM.
//!
//! Wiring sequence:
//! 1. Load config.toml (or `APP_CONFIG`) + validate, defaults if absent
//! 2. Init tracing (JSON or pretty structured logging)
//! 3. Create the Prometheus counter registry (all counters at 0)
//! 4. Spawn the HTTP server (/, /bye, /health, /metrics)
//! 5. Wait for SIGINT/SIGTERM → graceful shutdown

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use hello_metrics_server::adapters::http::HttpServer;
use hello_metrics_server::adapters::metrics::MetricsRegistry;
use hello_metrics_server::config::{self, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = config::loader::config_path();
    let config = config::loader::load_config_or_default(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured logging ────────────────────
    init_tracing(&config.server.log_level, config.server.log_format);

    info!(
        name = %config.server.name,
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        bind = %config.http.bind_address,
        "Starting server"
    );

    // ── 3. Counter registry, injected into every handler ────
    let metrics = Arc::new(
        MetricsRegistry::new().context("Failed to create metrics registry")?,
    );

    // ── 4. Spawn HTTP server ────────────────────────────────
    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);
    let server = HttpServer::new(metrics, config.http.bind_address.clone());
    let server_shutdown = shutdown_tx.subscribe();
    let mut server_handle = tokio::spawn(async move {
        if let Err(e) = server.run(server_shutdown).await {
            error!(error = %e, "HTTP server failed");
        }
    });

    // ── 5. Wait for a signal, or for the server to die ──────
    tokio::select! {
        () = shutdown_signal() => {
            info!("Shutdown signal received, draining connections");
        }
        _ = &mut server_handle => {
            anyhow::bail!("HTTP server exited unexpectedly");
        }
    }

    let _ = shutdown_tx.send(());

    let grace = Duration::from_secs(config.http.shutdown_timeout_seconds);
    if tokio::time::timeout(grace, server_handle).await.is_err() {
        warn!(
            timeout_s = config.http.shutdown_timeout_seconds,
            "Graceful shutdown timed out"
        );
    }

    info!("Shutdown complete");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

/// Resolves on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
