use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{
        CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::{Endpoint, OpenWeatherClient};
use crate::config::OpenWeatherConfig;
use crate::formatters::format_outcome;
use crate::models::WeatherQuery;

/// Weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: OpenWeatherClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service with the given configuration
    pub fn new(config: OpenWeatherConfig) -> Result<Self> {
        Ok(Self::with_client(OpenWeatherClient::new(config)?))
    }

    pub fn with_client(client: OpenWeatherClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub fn client(&self) -> &OpenWeatherClient {
        &self.client
    }

    /// Descriptors of every tool this server exposes
    pub fn tools() -> Vec<Tool> {
        Self::tool_router().list_all()
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-openweathermap".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Current weather and 5 day / 3 hour forecasts from OpenWeatherMap. \
                Identify the location by city name (q), city id, lat/lon or zip code."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current weather for one location
    #[tool(description = "Fetch current weather data for a specified location.")]
    pub async fn get_current_weather(
        &self,
        Parameters(query): Parameters<WeatherQuery>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting current weather for: {}", query.location_label());

        let outcome = self.client.current_weather(&query).await;
        Ok(format_outcome(Endpoint::CurrentWeather, &query, outcome))
    }

    /// Gets the 5 day / 3 hour forecast for one location
    #[tool(description = "Get the forecasted weather data (5 days, 3 hour steps) for a specific location.")]
    pub async fn forecast_weather(
        &self,
        Parameters(query): Parameters<WeatherQuery>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting forecast for: {}", query.location_label());

        let outcome = self.client.forecast(&query).await;
        Ok(format_outcome(Endpoint::Forecast, &query, outcome))
    }
}
