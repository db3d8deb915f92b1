// Response data structures for the forecast endpoint
mod response;

pub use response::{CurrentBlock, ForecastResponse, SeriesBlock};

use std::fmt;

use serde_json::Value;

use crate::client::{ParamValue, QueryParams};
use crate::error::AssertionFailure;

/// Time resolution of the requested weather fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Current,
    Hourly,
    Daily,
}

impl Granularity {
    /// Query-parameter name and response key for this granularity
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Current => "current",
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds `latitude`, `longitude` and `<granularity>=<fields>` parameters.
pub fn forecast_params(
    latitude: impl Into<ParamValue>,
    longitude: impl Into<ParamValue>,
    granularity: Granularity,
    fields: &[&str],
) -> QueryParams {
    QueryParams::new()
        .with("latitude", latitude)
        .with("longitude", longitude)
        .with(granularity.as_str(), fields.join(","))
}

impl ForecastResponse {
    pub fn current(&self) -> Result<&CurrentBlock, AssertionFailure> {
        self.current.as_ref().ok_or_else(|| missing("current"))
    }

    /// The hourly or daily block. `Current` has no series block.
    pub fn series(&self, granularity: Granularity) -> Result<&SeriesBlock, AssertionFailure> {
        let block = match granularity {
            Granularity::Current => None,
            Granularity::Hourly => self.hourly.as_ref(),
            Granularity::Daily => self.daily.as_ref(),
        };
        block.ok_or_else(|| missing(granularity.as_str()))
    }
}

impl CurrentBlock {
    /// A numeric measurement, e.g. `current.temperature_2m`
    pub fn number(&self, field: &str) -> Result<f64, AssertionFailure> {
        let path = format!("current.{}", field);
        let value = self.values.get(field).ok_or_else(|| missing(&path))?;
        value.as_f64().ok_or(AssertionFailure::UnexpectedType {
            path,
            expected: "a number",
        })
    }
}

impl SeriesBlock {
    /// A measurement array, e.g. `daily.temperature_2m_max`
    pub fn values(
        &self,
        granularity: Granularity,
        field: &str,
    ) -> Result<&[Value], AssertionFailure> {
        let path = format!("{}.{}", granularity, field);
        let value = self.series.get(field).ok_or_else(|| missing(&path))?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or(AssertionFailure::UnexpectedType {
                path,
                expected: "an array",
            })
    }
}

fn missing(path: &str) -> AssertionFailure {
    AssertionFailure::MissingField {
        path: path.to_string(),
    }
}
