use std::collections::HashMap;

use serde_json::Value;

/// Response structure for the Open-Meteo `/forecast` endpoint.
/// Only the block matching the requested granularity is present.
#[derive(serde::Deserialize, Debug)]
pub struct ForecastResponse {
    /// Grid-cell latitude the service snapped the request to
    pub latitude: f64,
    /// Grid-cell longitude the service snapped the request to
    pub longitude: f64,
    /// Server-side generation time in milliseconds
    pub generationtime_ms: Option<f64>,
    /// Timezone identifier, "GMT" unless requested otherwise
    pub timezone: Option<String>,
    pub current: Option<CurrentBlock>,
    pub hourly: Option<SeriesBlock>,
    pub daily: Option<SeriesBlock>,
}

/// Current conditions: one timestamp plus a scalar per requested field
#[derive(serde::Deserialize, Debug)]
pub struct CurrentBlock {
    /// ISO 8601 local time, e.g. "2024-01-15T12:00"
    pub time: String,
    /// Requested measurements keyed by field name (e.g. "temperature_2m")
    #[serde(flatten)]
    pub values: HashMap<String, Value>,
}

/// Hourly or daily data: a time axis plus one array per requested field
#[derive(serde::Deserialize, Debug)]
pub struct SeriesBlock {
    pub time: Vec<String>,
    #[serde(flatten)]
    pub series: HashMap<String, Value>,
}
