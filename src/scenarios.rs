//! End-to-end checks against the forecast endpoint.
//!
//! Each check sends one request and applies the validators to the response. A check
//! returns a short summary on success and the first violated expectation otherwise.

use tracing::{Instrument, error, info, info_span};

use crate::client::{HttpResponse, OpenMeteoClient, QueryParams};
use crate::config::{
    CITIES, City, FORECAST_ENDPOINT, INVALID_ENDPOINT, NUREMBERG, STATUS_BAD_REQUEST,
    STATUS_NOT_FOUND, STATUS_OK, TEMPERATURE_RANGE,
};
use crate::error::AppError;
use crate::forecast::{ForecastResponse, Granularity, forecast_params};
use crate::validator::ResponseValidator;

pub const CURRENT_FIELDS: [&str; 2] = ["temperature_2m", "wind_speed_10m"];
pub const HOURLY_FIELDS: [&str; 2] = ["temperature_2m", "precipitation"];
pub const DAILY_FIELDS: [&str; 2] = ["temperature_2m_max", "temperature_2m_min"];

/// Outcome of one check
#[derive(Debug)]
pub struct ScenarioReport {
    pub name: String,
    pub outcome: Result<String, AppError>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Status, latency and JSON checks shared by every successful request,
/// followed by decoding into the forecast shape.
fn expect_forecast(response: &HttpResponse) -> Result<ForecastResponse, AppError> {
    ResponseValidator::validate_status_code(response, STATUS_OK)?;
    ResponseValidator::validate_default_response_time(response)?;
    ResponseValidator::validate_json_response(response)?;
    response.parse()
}

/// Current temperature and wind speed for `city` are present and plausible.
pub async fn current_weather(client: &OpenMeteoClient, city: &City) -> Result<String, AppError> {
    info!("Testing current weather for {}", city.name);

    let params = forecast_params(
        city.latitude,
        city.longitude,
        Granularity::Current,
        &CURRENT_FIELDS,
    );
    let response = client.get(FORECAST_ENDPOINT, Some(&params)).await?;
    let forecast = expect_forecast(&response)?;

    let current = forecast.current()?;
    let temperature = current.number("temperature_2m")?;
    let wind_speed = current.number("wind_speed_10m")?;

    let (min, max) = TEMPERATURE_RANGE;
    ResponseValidator::validate_range("Temperature", temperature, min, max)?;
    ResponseValidator::validate_non_negative("Wind speed", wind_speed)?;

    Ok(format!(
        "{}: Temperature={}°C, Wind={} km/h",
        city.name, temperature, wind_speed
    ))
}

/// The hourly time axis is non-empty and ordered.
pub async fn hourly_forecast(client: &OpenMeteoClient, city: &City) -> Result<String, AppError> {
    info!("Testing hourly forecast for {}", city.name);

    let params = forecast_params(
        city.latitude,
        city.longitude,
        Granularity::Hourly,
        &HOURLY_FIELDS,
    );
    let response = client.get(FORECAST_ENDPOINT, Some(&params)).await?;
    let forecast = expect_forecast(&response)?;

    let hourly = forecast.series(Granularity::Hourly)?;
    ResponseValidator::validate_time_series("hourly.time", &hourly.time, Granularity::Hourly)?;

    Ok(format!("Hourly forecast: {} data points", hourly.time.len()))
}

/// Daily max/min temperatures are present and aligned with the daily time axis.
pub async fn daily_forecast(client: &OpenMeteoClient, city: &City) -> Result<String, AppError> {
    info!("Testing daily forecast for {}", city.name);

    let params = forecast_params(
        city.latitude,
        city.longitude,
        Granularity::Daily,
        &DAILY_FIELDS,
    );
    let response = client.get(FORECAST_ENDPOINT, Some(&params)).await?;
    let forecast = expect_forecast(&response)?;

    let daily = forecast.series(Granularity::Daily)?;
    ResponseValidator::validate_time_series("daily.time", &daily.time, Granularity::Daily)?;
    for field in DAILY_FIELDS {
        let values = daily.values(Granularity::Daily, field)?;
        ResponseValidator::validate_same_length(
            "daily.time",
            daily.time.len(),
            &format!("daily.{}", field),
            values.len(),
        )?;
    }

    Ok(format!("Daily forecast: {} days", daily.time.len()))
}

/// Coordinates outside the valid range are rejected with 400.
pub async fn invalid_coordinates(client: &OpenMeteoClient) -> Result<String, AppError> {
    info!("Testing invalid coordinates");

    let params = QueryParams::new()
        .with("latitude", 999)
        .with("longitude", 999)
        .with("current", "temperature_2m");
    let response = client.get(FORECAST_ENDPOINT, Some(&params)).await?;
    ResponseValidator::validate_status_code(&response, STATUS_BAD_REQUEST)?;

    Ok("API correctly returned 400 for invalid coordinates".to_string())
}

/// An unrouted path is rejected with 404.
pub async fn invalid_endpoint(client: &OpenMeteoClient) -> Result<String, AppError> {
    info!("Testing invalid endpoint handling");

    let params = forecast_params(
        NUREMBERG.latitude,
        NUREMBERG.longitude,
        Granularity::Current,
        &["temperature_2m"],
    );
    let response = client.get(INVALID_ENDPOINT, Some(&params)).await?;
    ResponseValidator::validate_status_code(&response, STATUS_NOT_FOUND)?;

    Ok("API correctly returned 404 for invalid endpoint".to_string())
}

/// Runs every check in order over one client. Failures don't stop later checks.
pub async fn run_all(client: &OpenMeteoClient) -> Vec<ScenarioReport> {
    let mut reports = Vec::new();

    for city in &CITIES {
        let name = format!("current_weather[{}]", city.name);
        let outcome = current_weather(client, city)
            .instrument(info_span!("scenario", name = %name))
            .await;
        reports.push(report(name, outcome));
    }

    let outcome = hourly_forecast(client, &NUREMBERG)
        .instrument(info_span!("scenario", name = "hourly_forecast"))
        .await;
    reports.push(report("hourly_forecast".to_string(), outcome));

    let outcome = daily_forecast(client, &NUREMBERG)
        .instrument(info_span!("scenario", name = "daily_forecast"))
        .await;
    reports.push(report("daily_forecast".to_string(), outcome));

    let outcome = invalid_coordinates(client)
        .instrument(info_span!("scenario", name = "invalid_coordinates"))
        .await;
    reports.push(report("invalid_coordinates".to_string(), outcome));

    let outcome = invalid_endpoint(client)
        .instrument(info_span!("scenario", name = "invalid_endpoint"))
        .await;
    reports.push(report("invalid_endpoint".to_string(), outcome));

    reports
}

fn report(name: String, outcome: Result<String, AppError>) -> ScenarioReport {
    match &outcome {
        Ok(summary) => info!("✓ {}", summary),
        Err(e) => error!("✗ {} failed: {}", name, e),
    }
    ScenarioReport { name, outcome }
}
