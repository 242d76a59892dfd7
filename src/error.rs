use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single OpenWeatherMap call.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The service answered with a non-success status
    #[error("OpenWeatherMap returned {status}: {message}")]
    Remote { status: StatusCode, message: String },

    /// The request never produced a response
    #[error("Request to OpenWeatherMap failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("Failed to decode OpenWeatherMap response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::Remote { .. } => "remote",
            WeatherError::Transport(_) => "transport",
            WeatherError::Decode(_) => "decode",
        }
    }

    /// Builds a `Remote` error from a failed response body, falling back to
    /// `fallback` when the body has no string `message` field.
    pub fn remote(status: StatusCode, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        WeatherError::Remote { status, message }
    }
}
