use demo_service::lifecycle;
use demo_service::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("demo-service v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = lifecycle::run().await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
