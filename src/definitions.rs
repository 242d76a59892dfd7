//! Function-calling descriptors for agent frameworks that do not speak MCP.
//!
//! Built from the MCP tool list, so both surfaces share one name,
//! description and parameter schema per tool.

use rmcp::model::Tool;
use serde::Serialize;
use serde_json::Value;

use crate::client::Endpoint;
use crate::service::Weather;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// `{ "type": "function", "function": { name, description, parameters } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

impl From<&Tool> for ToolDefinition {
    fn from(tool: &Tool) -> Self {
        let mut parameters = tool.input_schema.as_ref().clone();
        parameters.remove("$schema");
        parameters.remove("title");

        Self {
            kind: "function".to_string(),
            function: FunctionDefinition {
                name: tool.name.to_string(),
                description: tool.description.as_deref().unwrap_or_default().to_string(),
                parameters: Value::Object(parameters),
            },
        }
    }
}

pub fn definition(endpoint: Endpoint) -> Option<ToolDefinition> {
    Weather::tools()
        .iter()
        .find(|tool| tool.name == endpoint.tool_name())
        .map(ToolDefinition::from)
}

/// Current weather first, then forecast.
pub fn all_definitions() -> Vec<ToolDefinition> {
    [Endpoint::CurrentWeather, Endpoint::Forecast]
        .into_iter()
        .filter_map(definition)
        .collect()
}
