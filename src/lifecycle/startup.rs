//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration from the environment
//! - Start the optional metrics exporter
//! - Bind the listener and serve until a termination signal
//!
//! Any startup error is fatal.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{self, ConfigError, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the service with configuration read from the environment.
pub async fn run() -> Result<(), StartupError> {
    let config = config::from_env()?;
    serve(config).await
}

/// Run the service with an explicit configuration.
pub async fn serve(config: ServiceConfig) -> Result<(), StartupError> {
    tracing::info!(
        expose_port = config.expose_port,
        target_one = %config.target_one_svc,
        target_two = %config.target_two_svc,
        time_bomb = config.time_bomb,
        "Configuration loaded"
    );

    if let Some(addr) = config.metrics_address {
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;
    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    server.run(listener, stop).await?;
    Ok(())
}
