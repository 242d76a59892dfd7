use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

// ============================================================================
// MCP Tool Request Models
// ============================================================================

/// Unit system for temperatures and wind speed.
///
/// Documented values are matched case-insensitively; anything else is kept
/// as given and left for OpenWeatherMap to judge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Units {
    Standard,
    Metric,
    Imperial,
    Other(String),
}

impl Units {
    pub fn as_str(&self) -> &str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Other(raw) => raw,
        }
    }
}

impl From<String> for Units {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "standard" => Units::Standard,
            "metric" => Units::Metric,
            "imperial" => Units::Imperial,
            _ => Units::Other(raw),
        }
    }
}

impl From<Units> for String {
    fn from(units: Units) -> Self {
        units.as_str().to_string()
    }
}

impl JsonSchema for Units {
    fn schema_name() -> Cow<'static, str> {
        "Units".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "examples": ["standard", "metric", "imperial"]
        })
    }
}

/// Response body format, with the same leniency as [`Units`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Json,
    Xml,
    Html,
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Json => "json",
            Mode::Xml => "xml",
            Mode::Html => "html",
            Mode::Other(raw) => raw,
        }
    }
}

impl From<String> for Mode {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "json" => Mode::Json,
            "xml" => Mode::Xml,
            "html" => Mode::Html,
            _ => Mode::Other(raw),
        }
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

impl JsonSchema for Mode {
    fn schema_name() -> Cow<'static, str> {
        "Mode".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "examples": ["json", "xml", "html"]
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

/// City ids arrive as JSON numbers or as strings; both are sent verbatim.
fn city_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberOrString>::deserialize(deserializer)?.map(|id| match id {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }),
    )
}

/// Location and formatting parameters shared by both weather tools.
///
/// Every field is optional; OpenWeatherMap itself rejects a request that
/// identifies no location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct WeatherQuery {
    /// City name for the weather query (e.g., "London").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    /// City ID for the weather query.
    #[serde(default, deserialize_with = "city_id", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<u64>")]
    pub id: Option<String>,

    /// Latitude of the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude of the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    /// Zip code for the location, optionally with a country code (e.g., "95050,us").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Units of measurement: "standard", "metric" or "imperial".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,

    /// Language code for the response (e.g., "en").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Response format: "json", "xml" or "html".
    #[serde(default, alias = "Mode", skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// OpenWeatherMap API key; overrides the server's configured key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appid: Option<String>,
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        Self {
            q: Some(name.into()),
            ..Self::default()
        }
    }

    /// URL query parameters for the present fields, in a fixed order.
    ///
    /// `appid` comes from the query when set, else from `default_key`, and is
    /// left out when neither exists.
    pub fn query_pairs(&self, default_key: Option<&str>) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(id) = &self.id {
            pairs.push(("id", id.clone()));
        }
        if let Some(lat) = self.lat {
            pairs.push(("lat", lat.to_string()));
        }
        if let Some(lon) = self.lon {
            pairs.push(("lon", lon.to_string()));
        }
        if let Some(zip) = &self.zip {
            pairs.push(("zip", zip.clone()));
        }
        if let Some(units) = &self.units {
            pairs.push(("units", units.as_str().to_string()));
        }
        if let Some(lang) = &self.lang {
            pairs.push(("lang", lang.clone()));
        }
        if let Some(mode) = &self.mode {
            pairs.push(("mode", mode.as_str().to_string()));
        }
        if let Some(key) = self.appid.as_deref().or(default_key) {
            pairs.push(("appid", key.to_string()));
        }

        pairs
    }

    /// True when the remote service will answer with a non-JSON body.
    pub fn expects_markup(&self) -> bool {
        matches!(self.mode, Some(Mode::Xml | Mode::Html))
    }

    /// Short location summary for log lines; never includes the API key.
    pub fn location_label(&self) -> String {
        if let Some(q) = &self.q {
            return q.clone();
        }
        if let Some(id) = &self.id {
            return format!("id {id}");
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return format!("{lat}, {lon}");
        }
        if let Some(zip) = &self.zip {
            return format!("zip {zip}");
        }
        "<unspecified>".to_string()
    }
}

// ============================================================================
// Tool Result Models
// ============================================================================

/// Fixed-shape value returned in place of a failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// What a tool hands back: the decoded payload, or the error sentinel.
///
/// Serializes untagged, so callers see either the raw body or
/// `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeatherResult {
    Payload(serde_json::Value),
    Error(ErrorResult),
}

impl WeatherResult {
    pub fn is_error(&self) -> bool {
        matches!(self, WeatherResult::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_not_emitted() {
        let query = WeatherQuery {
            q: Some("London".into()),
            units: Some(Units::Metric),
            ..Default::default()
        };

        let pairs = query.query_pairs(None);
        assert_eq!(
            pairs,
            vec![("q", "London".to_string()), ("units", "metric".to_string())]
        );
    }

    #[test]
    fn explicit_key_overrides_default() {
        let query = WeatherQuery {
            appid: Some("EXPLICIT".into()),
            ..WeatherQuery::city("Paris")
        };

        let pairs = query.query_pairs(Some("DEFAULT"));
        assert!(pairs.contains(&("appid", "EXPLICIT".to_string())));
        assert!(!pairs.iter().any(|(_, v)| v == "DEFAULT"));
    }

    #[test]
    fn default_key_used_when_query_has_none() {
        let pairs = WeatherQuery::city("Paris").query_pairs(Some("DEFAULT"));
        assert_eq!(pairs.last(), Some(&("appid", "DEFAULT".to_string())));
    }

    #[test]
    fn zero_coordinates_are_still_sent() {
        let query = WeatherQuery {
            lat: Some(0.0),
            lon: Some(-0.5),
            ..Default::default()
        };

        let pairs = query.query_pairs(None);
        assert_eq!(
            pairs,
            vec![("lat", "0".to_string()), ("lon", "-0.5".to_string())]
        );
    }

    #[test]
    fn mode_uses_lowercase_parameter_and_accepts_capitalised_input() {
        let query: WeatherQuery =
            serde_json::from_str(r#"{ "q": "Oslo", "Mode": "xml" }"#).expect("query should parse");

        assert_eq!(query.mode, Some(Mode::Xml));
        assert!(query.expects_markup());
        assert!(query
            .query_pairs(None)
            .contains(&("mode", "xml".to_string())));
    }

    #[test]
    fn unknown_units_and_mode_pass_through() {
        let query: WeatherQuery =
            serde_json::from_str(r#"{ "q": "London", "units": "kelvin", "mode": "csv" }"#)
                .expect("lenient values should parse");

        assert_eq!(query.units, Some(Units::Other("kelvin".into())));
        let pairs = query.query_pairs(None);
        assert!(pairs.contains(&("units", "kelvin".to_string())));
        assert!(pairs.contains(&("mode", "csv".to_string())));
        assert!(!query.expects_markup());
    }

    #[test]
    fn documented_values_match_any_case() {
        let query: WeatherQuery =
            serde_json::from_str(r#"{ "units": "Metric", "mode": "XML" }"#).expect("query");

        assert_eq!(query.units, Some(Units::Metric));
        assert_eq!(query.mode, Some(Mode::Xml));
        assert_eq!(
            query.query_pairs(None),
            vec![("units", "metric".to_string()), ("mode", "xml".to_string())]
        );
    }

    #[test]
    fn city_id_accepts_number_or_string() {
        let numeric: WeatherQuery = serde_json::from_str(r#"{ "id": 2643743 }"#).expect("number");
        let text: WeatherQuery = serde_json::from_str(r#"{ "id": "2643743" }"#).expect("string");

        assert_eq!(numeric.id.as_deref(), Some("2643743"));
        assert_eq!(numeric, text);
        assert_eq!(text.query_pairs(None), vec![("id", "2643743".to_string())]);
    }

    #[test]
    fn lenient_fields_serialize_as_plain_strings() {
        let query = WeatherQuery {
            units: Some(Units::Imperial),
            mode: Some(Mode::Other("csv".into())),
            ..WeatherQuery::city("Oslo")
        };

        let value = serde_json::to_value(&query).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({ "q": "Oslo", "units": "imperial", "mode": "csv" })
        );
    }

    #[test]
    fn location_label_skips_api_key() {
        let query = WeatherQuery {
            zip: Some("95050,us".into()),
            appid: Some("SECRET".into()),
            ..Default::default()
        };

        assert_eq!(query.location_label(), "zip 95050,us");
    }

    #[test]
    fn error_result_serializes_single_field() {
        let value = serde_json::to_value(ErrorResult::new("boom")).expect("serialize");
        assert_eq!(value, serde_json::json!({ "error": "boom" }));
    }

    #[test]
    fn weather_result_serializes_untagged() {
        let payload = WeatherResult::Payload(serde_json::json!({ "main": { "temp": 15 } }));
        let error = WeatherResult::Error(ErrorResult::new("boom"));

        assert!(!payload.is_error());
        assert!(error.is_error());
        assert_eq!(
            serde_json::to_value(&payload).expect("serialize"),
            serde_json::json!({ "main": { "temp": 15 } })
        );
        assert_eq!(
            serde_json::to_value(&error).expect("serialize"),
            serde_json::json!({ "error": "boom" })
        );
    }
}
