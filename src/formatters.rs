use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use crate::client::{settle, Endpoint};
use crate::error::WeatherError;
use crate::models::{WeatherQuery, WeatherResult};

/// Formats a JSON payload as tool text content
pub fn format_payload(payload: &Value) -> String {
    match payload {
        // xml / html bodies are passed through untouched
        Value::String(markup) => markup.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Renders a settled result as the tool result handed back to the caller.
///
/// The error sentinel is reported as a tool-level error, never as a protocol
/// fault.
pub fn format_result(result: &WeatherResult) -> CallToolResult {
    match result {
        WeatherResult::Payload(payload) => {
            CallToolResult::success(vec![Content::text(format_payload(payload))])
        }
        WeatherResult::Error(sentinel) => {
            let text = serde_json::to_string(sentinel).unwrap_or_else(|_| sentinel.error.clone());
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}

pub fn format_outcome(
    endpoint: Endpoint,
    query: &WeatherQuery,
    outcome: Result<Value, WeatherError>,
) -> CallToolResult {
    format_result(&settle(endpoint, query, outcome))
}
