/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-openweathermap-server/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHERMAP_API_BASE: &str = "http://api.openweathermap.org/data/2.5";

/// Current weather endpoint path
pub const CURRENT_WEATHER_PATH: &str = "/weather";

/// 5 day / 3 hour forecast endpoint path
pub const FORECAST_PATH: &str = "/forecast";

/// Environment variable holding the default API key
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "OPENWEATHERMAP_BASE_URL";

/// Environment variable holding an optional request timeout in seconds
pub const TIMEOUT_ENV: &str = "OPENWEATHERMAP_TIMEOUT_SECS";

pub const CURRENT_WEATHER_FAILURE: &str = "An error occurred while fetching weather data.";
pub const FORECAST_FAILURE: &str = "An error occurred while fetching forecasted weather data.";

pub const CURRENT_WEATHER_FALLBACK_MESSAGE: &str = "Error fetching weather data";
pub const FORECAST_FALLBACK_MESSAGE: &str = "Error fetching forecasted weather data";
