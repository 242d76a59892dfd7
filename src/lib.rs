//! OpenWeatherMap tools served over MCP.
//!
//! Two stateless tools, `get_current_weather` and `forecast_weather`, each
//! issue one GET against OpenWeatherMap and hand back the decoded JSON body.
//! Failures are typed ([`WeatherError`]) inside the crate and collapse to a
//! fixed `{ "error": ... }` value at the tool boundary.

pub mod client;
pub mod config;
pub mod constants;
pub mod definitions;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

pub use client::{sentinel, settle, Endpoint, OpenWeatherClient};
pub use config::OpenWeatherConfig;
pub use definitions::{all_definitions, ToolDefinition};
pub use error::WeatherError;
pub use models::{ErrorResult, Mode, Units, WeatherQuery, WeatherResult};
pub use service::Weather;
