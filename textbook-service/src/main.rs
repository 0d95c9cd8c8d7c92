use service_core::observability::init_tracing;
use textbook_service::config::TextbookConfig;
use textbook_service::services::init_metrics;
use textbook_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = TextbookConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "textbook-service",
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    );
    init_metrics();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
