use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::AppError;

/// A scalar query-string value
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    Float(f64),
    Int(i64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// Ordered query parameters, serialized by reqwest as `name=value` pairs
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, keeping insertion order
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// What the validators need from a completed response
pub trait ApiResponse {
    /// HTTP status code
    fn status(&self) -> u16;

    /// Time from sending the request until the response headers arrived
    fn elapsed(&self) -> Duration;

    /// Decodes the body as untyped JSON
    fn json(&self) -> Result<serde_json::Value, serde_json::Error>;
}

/// A response with its body fully buffered
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Requested URL, without the query string
    pub url: String,
    pub status: u16,
    pub elapsed: Duration,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Decodes the body into a typed structure
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl ApiResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// HTTP client for the Open-Meteo service.
///
/// Holds one pooled `reqwest::Client` for its whole lifetime. Call [`close`](Self::close)
/// once at teardown; dropping the client releases the pool as well.
#[derive(Debug)]
pub struct OpenMeteoClient {
    base_url: String,
    session: reqwest::Client,
}

impl OpenMeteoClient {
    /// Creates a client for `base_url` with the default timeout.
    ///
    /// No network I/O happens here.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_config(&ApiConfig::with_base_url(base_url))
    }

    pub fn with_config(config: &ApiConfig) -> Result<Self, AppError> {
        let session = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        debug!("Created HTTP session for {}", config.base_url);
        Ok(Self {
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request against `base_url + endpoint`.
    ///
    /// # Arguments
    /// * `endpoint` - Path appended verbatim to the base URL (e.g. "/forecast")
    /// * `params` - Optional query parameters
    ///
    /// # Returns
    /// * The buffered response, whatever its status code
    /// * `AppError::Request` on timeout, DNS failure, refused connection or a broken body
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<HttpResponse, AppError> {
        let url = format!("{}{}", self.base_url, endpoint);
        info!("GET request to: {}", url);

        let mut request = self.session.get(&url);
        if let Some(params) = params {
            debug!("Query parameters: {}", params);
            request = request.query(params);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let elapsed = started.elapsed();

        let status = response.status().as_u16();
        info!("Response status: {}", status);

        let body = response.bytes().await?.to_vec();
        debug!("Received {} bytes in {:?}", body.len(), elapsed);

        Ok(HttpResponse {
            url,
            status,
            elapsed,
            body,
        })
    }

    /// Releases the pooled connections. Consumes the client, so it can only happen once.
    pub fn close(self) {
        info!("Closing HTTP session for {}", self.base_url);
        drop(self.session);
    }
}
