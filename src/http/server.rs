//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, limits, timeout)
//! - Share immutable state (upstream client, credential) with handlers
//! - Serve on a caller-provided listener with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ApiKey, ProxyConfig};
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::upstream::UpstreamClient;

/// Maximum inbound request body size. Lookups are GET requests, so
/// anything close to this limit is already suspect.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Application state injected into handlers.
///
/// Immutable after startup; cloning shares the same upstream client.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub credential: Option<Arc<ApiKey>>,
}

/// HTTP server for the weather proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The credential is resolved once by the caller and shared by every
    /// endpoint; `None` makes lookups fail with a configuration error.
    pub fn new(config: ProxyConfig, credential: Option<ApiKey>) -> Self {
        let state = AppState {
            upstream: Arc::new(UpstreamClient::new(&config.upstream)),
            credential: credential.map(Arc::new),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/current-weather", get(handlers::current_weather))
            .route("/forecast", get(handlers::forecast))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server on the given listener until the shutdown signal
    /// fires, then drain gracefully.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}
