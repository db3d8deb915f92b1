use std::time::Duration;

// Open-Meteo forecast service
pub const BASE_URL: &str = "https://api.open-meteo.com/v1";

pub const FORECAST_ENDPOINT: &str = "/forecast";

/// Path that the service does not route; used by the negative endpoint check
pub const INVALID_ENDPOINT: &str = "/v1/invalid_endpoint";

/// Fixed timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Default ceiling for the response-time assertion
pub const MAX_RESPONSE_TIME: Duration = Duration::from_secs(3);

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Plausible bounds for a 2 m air temperature reading, in °C
pub const TEMPERATURE_RANGE: (f64, f64) = (-50.0, 50.0);

/// A named location the checks are run against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    /// Degrees, within [-90, 90]
    pub latitude: f64,
    /// Degrees, within [-180, 180]
    pub longitude: f64,
}

impl City {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }

    /// Whether the coordinates are inside the range the service accepts
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

pub const NUREMBERG: City = City::new("Nürnberg", 49.4521, 11.0767);
pub const BERLIN: City = City::new("Berlin", 52.5200, 13.4050);
pub const PATRAS: City = City::new("Patras", 38.2466, 21.7346);

/// Every city the current-weather check is parameterized over
pub const CITIES: [City; 3] = [NUREMBERG, PATRAS, BERLIN];

/// Runtime settings for one client session
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub max_response_time: Duration,
}

impl ApiConfig {
    /// Defaults with a different base URL, e.g. a local stub server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            max_response_time: MAX_RESPONSE_TIME,
        }
    }
}
