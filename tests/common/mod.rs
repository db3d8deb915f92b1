//! Shared fixtures for integration tests: logging and a stub of the forecast service.

#![allow(dead_code)]

use serde_json::{Value, json};
use weather_checks::OpenMeteoClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Routes logs into the test harness' captured output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("weather_checks=debug")
        .with_test_writer()
        .try_init();
}

/// Path the stub serves, mirroring the real service's `/v1/forecast`
pub const FORECAST_PATH: &str = "/v1/forecast";

/// Client pointed at the stub's `/v1` prefix, like the real base URL
pub fn client_for(server: &MockServer) -> OpenMeteoClient {
    #[allow(clippy::expect_used)]
    OpenMeteoClient::new(&format!("{}/v1", server.uri())).expect("Failed to create client")
}

/// Answers like Open-Meteo: 400 for out-of-range coordinates, otherwise a body
/// with one block per requested granularity.
pub struct ForecastStub;

impl Respond for ForecastStub {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let query: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        let param = |name: &str| query_value(&query, name);

        let latitude = param("latitude").and_then(|v| v.parse::<f64>().ok());
        let longitude = param("longitude").and_then(|v| v.parse::<f64>().ok());
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return bad_request("Parameter 'latitude' and 'longitude' are required");
        };
        if !(-90.0..=90.0).contains(&latitude) {
            return bad_request(&format!(
                "Latitude must be in range of -90 to 90°. Given: {latitude:.1}."
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return bad_request(&format!(
                "Longitude must be in range of -180 to 180°. Given: {longitude:.1}."
            ));
        }

        let mut body = json!({
            "latitude": latitude,
            "longitude": longitude,
            "generationtime_ms": 0.042,
            "utc_offset_seconds": 0,
            "timezone": "GMT",
            "timezone_abbreviation": "GMT",
            "elevation": 38.0
        });
        if let Some(fields) = param("current") {
            body["current"] = current_block(fields);
        }
        if let Some(fields) = param("hourly") {
            body["hourly"] = hourly_block(fields, 48);
        }
        if let Some(fields) = param("daily") {
            body["daily"] = daily_block(fields, 7);
        }

        ResponseTemplate::new(200).set_body_json(body)
    }
}

fn query_value<'a>(query: &'a [(String, String)], name: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn bad_request(reason: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({ "error": true, "reason": reason }))
}

fn current_block(fields: &str) -> Value {
    let mut block = json!({ "time": "2024-01-15T12:00", "interval": 900 });
    for field in fields.split(',') {
        block[field] = json!(sample_value(field, 0));
    }
    block
}

fn hourly_block(fields: &str, hours: usize) -> Value {
    let time: Vec<String> = (0..hours)
        .map(|h| format!("2024-01-{:02}T{:02}:00", 15 + h / 24, h % 24))
        .collect();
    series_block(fields, time)
}

fn daily_block(fields: &str, days: usize) -> Value {
    let time: Vec<String> = (0..days).map(|d| format!("2024-01-{:02}", 15 + d)).collect();
    series_block(fields, time)
}

fn series_block(fields: &str, time: Vec<String>) -> Value {
    let len = time.len();
    let mut block = json!({ "time": time });
    for field in fields.split(',') {
        let values: Vec<f64> = (0..len).map(|i| sample_value(field, i)).collect();
        block[field] = json!(values);
    }
    block
}

fn sample_value(field: &str, i: usize) -> f64 {
    let i = i as f64;
    match field {
        "temperature_2m_max" => 8.0 + i * 0.5,
        "temperature_2m_min" => 1.0 + i * 0.25,
        "wind_speed_10m" => 12.5,
        "precipitation" => (i * 0.1) % 1.2,
        _ => 5.5 - i * 0.1,
    }
}

/// Stub server with the forecast route mounted
pub async fn forecast_server() -> MockServer {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ForecastStub)
        .mount(&server)
        .await;
    server
}

/// Stub server that answers the forecast route with a fixed response
pub async fn fixed_server(response: ResponseTemplate) -> MockServer {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}
