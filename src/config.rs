use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, BASE_URL_ENV, OPENWEATHERMAP_API_BASE, TIMEOUT_ENV};

/// Settings injected into [`crate::OpenWeatherClient`] at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <http://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default API key, used when a query carries no `appid`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds; no deadline when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    OPENWEATHERMAP_API_BASE.to_string()
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl OpenWeatherConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = non_empty(TIMEOUT_ENV).and_then(|raw| match raw.trim().parse() {
            Ok(secs) => Some(secs),
            Err(_) => {
                tracing::warn!("Ignoring invalid {}: {:?}", TIMEOUT_ENV, raw);
                None
            }
        });

        Self {
            base_url: non_empty(BASE_URL_ENV).unwrap_or_else(default_base_url),
            api_key: non_empty(API_KEY_ENV),
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}
