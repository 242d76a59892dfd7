use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcp_openweathermap_server::{OpenWeatherConfig, Weather};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_openweathermap_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = OpenWeatherConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("No default API key configured; requests must carry appid");
    }

    tracing::info!("Starting MCP OpenWeatherMap server against {}", config.base_url);

    let weather = Weather::new(config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
