use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::OpenWeatherConfig;
use crate::constants::{
    CURRENT_WEATHER_FAILURE, CURRENT_WEATHER_FALLBACK_MESSAGE, CURRENT_WEATHER_PATH,
    FORECAST_FAILURE, FORECAST_FALLBACK_MESSAGE, FORECAST_PATH, USER_AGENT,
};
use crate::error::WeatherError;
use crate::models::{ErrorResult, WeatherQuery, WeatherResult};

/// The two OpenWeatherMap resources exposed as tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CurrentWeather,
    Forecast,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => CURRENT_WEATHER_PATH,
            Endpoint::Forecast => FORECAST_PATH,
        }
    }

    pub fn tool_name(&self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => "get_current_weather",
            Endpoint::Forecast => "forecast_weather",
        }
    }

    /// Message used when a failed response carries no readable `message`.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => CURRENT_WEATHER_FALLBACK_MESSAGE,
            Endpoint::Forecast => FORECAST_FALLBACK_MESSAGE,
        }
    }

    /// Sentinel returned to tool callers for any failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => CURRENT_WEATHER_FAILURE,
            Endpoint::Forecast => FORECAST_FAILURE,
        }
    }
}

/// Stateless OpenWeatherMap client; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    /// Current weather for one location
    pub async fn current_weather(&self, query: &WeatherQuery) -> Result<Value, WeatherError> {
        self.fetch(Endpoint::CurrentWeather, query).await
    }

    /// 5 day / 3 hour forecast for one location
    pub async fn forecast(&self, query: &WeatherQuery) -> Result<Value, WeatherError> {
        self.fetch(Endpoint::Forecast, query).await
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint.path())
    }

    /// Makes one GET request and decodes the JSON body verbatim
    pub async fn fetch(&self, endpoint: Endpoint, query: &WeatherQuery) -> Result<Value, WeatherError> {
        let url = self.endpoint_url(endpoint);
        let params = query.query_pairs(self.config.api_key.as_deref());

        tracing::debug!(
            "GET {} for {} ({} parameters)",
            url,
            query.location_label(),
            params.len()
        );

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            // an unreadable error body still yields the fallback message
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::remote(status, &body, endpoint.fallback_message()));
        }

        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) if query.expects_markup() => Ok(Value::String(body)),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`fetch`](Self::fetch), but any failure becomes the endpoint's
    /// [`ErrorResult`].
    pub async fn fetch_or_sentinel(&self, endpoint: Endpoint, query: &WeatherQuery) -> WeatherResult {
        let outcome = self.fetch(endpoint, query).await;
        settle(endpoint, query, outcome)
    }
}

/// The fixed failure value of a tool.
pub fn sentinel(endpoint: Endpoint) -> ErrorResult {
    ErrorResult::new(endpoint.failure_message())
}

/// Collapses a fetch outcome at the tool boundary, logging the failure.
pub fn settle(
    endpoint: Endpoint,
    query: &WeatherQuery,
    outcome: Result<Value, WeatherError>,
) -> WeatherResult {
    match outcome {
        Ok(payload) => WeatherResult::Payload(payload),
        Err(e) => {
            tracing::error!(
                "{} failed for {} ({} error): {}",
                endpoint.tool_name(),
                query.location_label(),
                e.kind(),
                e
            );
            WeatherResult::Error(sentinel(endpoint))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> OpenWeatherClient {
        OpenWeatherClient::new(OpenWeatherConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .expect("client should build")
    }

    #[test]
    fn endpoint_urls_join_without_double_slash() {
        let c = client("http://api.openweathermap.org/data/2.5/");
        assert_eq!(
            c.endpoint_url(Endpoint::Forecast),
            "http://api.openweathermap.org/data/2.5/forecast"
        );
        assert_eq!(
            c.endpoint_url(Endpoint::CurrentWeather),
            "http://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[test]
    fn sentinels_differ_per_endpoint() {
        assert_eq!(
            sentinel(Endpoint::CurrentWeather).error,
            "An error occurred while fetching weather data."
        );
        assert_eq!(
            sentinel(Endpoint::Forecast).error,
            "An error occurred while fetching forecasted weather data."
        );
    }

    #[test]
    fn settle_keeps_payload_and_collapses_errors() {
        let query = WeatherQuery::city("London");

        let ok = settle(Endpoint::CurrentWeather, &query, Ok(serde_json::json!({ "cod": 200 })));
        assert_eq!(ok, WeatherResult::Payload(serde_json::json!({ "cod": 200 })));

        let err = WeatherError::remote(reqwest::StatusCode::NOT_FOUND, "", "fallback");
        let collapsed = settle(Endpoint::Forecast, &query, Err(err));
        assert_eq!(collapsed, WeatherResult::Error(sentinel(Endpoint::Forecast)));
    }

    #[test]
    fn client_accepts_timeout() {
        let c = OpenWeatherClient::new(OpenWeatherConfig {
            timeout_secs: Some(3),
            ..Default::default()
        })
        .expect("client should build");
        assert_eq!(c.config().timeout_secs, Some(3));
    }
}
