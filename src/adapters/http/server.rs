//! HTTP Server - Greeting, Health and Metrics Routes
//!
//! Exposes `/`, `/bye`, `/health` and `/metrics` via axum 0.7. Every
//! route is GET-only: HEAD and other methods get 405 without touching
//! the counters, unknown paths get 404.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{error, info, instrument};

use crate::adapters::metrics::CONTENT_TYPE;
use crate::ports::request_metrics::RequestMetrics;
use crate::usecases::endpoints;

/// Registry handle shared by every handler.
pub type SharedMetrics = Arc<dyn RequestMetrics>;

/// Build the application router around a counter registry.
pub fn router(metrics: SharedMetrics) -> Router {
    Router::new()
        .route("/", get_only(get(main_endpoint)))
        .route("/bye", get_only(get(bye_endpoint)))
        .route("/health", get_only(get(health_endpoint)))
        .route("/metrics", get_only(get(metrics_endpoint)))
        .with_state(metrics)
}

/// axum serves HEAD through the GET handler unless HEAD has its own
/// endpoint; pin it to 405 so probes are never counted.
fn get_only(route: MethodRouter<SharedMetrics>) -> MethodRouter<SharedMetrics> {
    route.head(head_not_allowed)
}

async fn head_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}

async fn main_endpoint(State(metrics): State<SharedMetrics>) -> impl IntoResponse {
    Json(endpoints::main(metrics.as_ref()))
}

async fn bye_endpoint(State(metrics): State<SharedMetrics>) -> impl IntoResponse {
    Json(endpoints::bye(metrics.as_ref()))
}

async fn health_endpoint(State(metrics): State<SharedMetrics>) -> impl IntoResponse {
    Json(endpoints::health(metrics.as_ref()))
}

async fn metrics_endpoint(State(metrics): State<SharedMetrics>) -> Response {
    match endpoints::metrics(metrics.as_ref()) {
        Ok(body) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Axum-based HTTP server for the public routes.
pub struct HttpServer {
    /// Counter registry shared with all handlers.
    metrics: SharedMetrics,
    /// Bind address (default 0.0.0.0:8000 from config).
    bind_address: String,
}

impl HttpServer {
    /// Create a new HTTP server.
    pub fn new(metrics: SharedMetrics, bind_address: impl Into<String>) -> Self {
        Self {
            metrics,
            bind_address: bind_address.into(),
        }
    }

    /// Bind the listener and serve until the shutdown signal fires.
    #[instrument(skip(self, shutdown_rx), fields(address = %self.bind_address))]
    pub async fn run(self, shutdown_rx: broadcast::Receiver<()>) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.bind_address).await?;
        Self::serve(listener, self.metrics, shutdown_rx).await
    }

    /// Serve on an already bound listener.
    ///
    /// Lets callers bind port 0 and read the chosen address first.
    pub async fn serve(
        listener: TcpListener,
        metrics: SharedMetrics,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> anyhow::Result<()> {
        let addr: SocketAddr = listener.local_addr()?;
        info!(address = %addr, "HTTP server started");

        axum::serve(listener, router(metrics))
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
