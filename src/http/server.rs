//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, metrics)
//! - Bind server to listener
//! - Stop gracefully when the shutdown signal fires

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::chain::Chain;
use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::middleware::{cors_middleware, get_only};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::observability::{metrics, tracing::make_request_span};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub chain: Arc<Chain>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Result<Self, reqwest::Error> {
        // Downstream calls go straight to the targets, never via HTTP_PROXY.
        let client = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self {
            chain: Arc::new(Chain::from_config(&config)),
            config: Arc::new(config),
            client,
        })
    }
}

/// HTTP server for the demo endpoints.
pub struct HttpServer {
    router: Router,
    config: Arc<ServiceConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, reqwest::Error> {
        let state = AppState::new(config)?;
        let config = state.config.clone();
        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/io_task", get(handlers::io_task))
            .route("/cpu_task", get(handlers::cpu_task))
            .route("/random_status", get(handlers::random_status))
            .route("/random_sleep", get(handlers::random_sleep))
            .route("/chain", get(handlers::chain))
            .route("/error", get(handlers::error))
            .route("/error_test", get(handlers::error_test))
            .route_layer(middleware::from_fn(get_only))
            .route_layer(middleware::from_fn(metrics::track_metrics))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(middleware::from_fn(cors_middleware))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The fully layered router, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            target_one = %self.config.target_one_svc,
            target_two = %self.config.target_two_svc,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
