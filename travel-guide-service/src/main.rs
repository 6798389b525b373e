use service_core::observability::init_tracing;
use travel_guide_service::config::TravelConfig;
use travel_guide_service::services::init_metrics;
use travel_guide_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("travel-guide-service", &log_level, otlp_endpoint.as_deref());

    let config = TravelConfig::load().map_err(|e| {
        tracing::error!("CRITICAL ERROR: failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_metrics();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await?;

    Ok(())
}
