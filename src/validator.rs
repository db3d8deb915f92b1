use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::client::ApiResponse;
use crate::config::MAX_RESPONSE_TIME;
use crate::error::AssertionFailure;
use crate::forecast::Granularity;

/// Stateless assertions over completed responses and their decoded fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseValidator;

impl ResponseValidator {
    pub fn validate_status_code(
        response: &impl ApiResponse,
        expected: u16,
    ) -> Result<(), AssertionFailure> {
        let actual = response.status();
        if actual != expected {
            return Err(AssertionFailure::StatusMismatch { expected, actual });
        }
        Ok(())
    }

    /// Decodes the body, failing on malformed JSON or a bare `null`.
    pub fn validate_json_response(response: &impl ApiResponse) -> Result<Value, AssertionFailure> {
        match response.json() {
            Ok(Value::Null) | Err(_) => Err(AssertionFailure::InvalidJson),
            Ok(value) => Ok(value),
        }
    }

    /// Fails if the response took longer than `max_time`. Equal to the ceiling passes.
    pub fn validate_response_time(
        response: &impl ApiResponse,
        max_time: Duration,
    ) -> Result<(), AssertionFailure> {
        let elapsed = response.elapsed();
        if elapsed > max_time {
            return Err(AssertionFailure::ResponseTimeExceeded {
                max_secs: max_time.as_secs_f64(),
                actual_secs: elapsed.as_secs_f64(),
            });
        }
        Ok(())
    }

    /// `validate_response_time` with the configured 3 s ceiling
    pub fn validate_default_response_time(
        response: &impl ApiResponse,
    ) -> Result<(), AssertionFailure> {
        Self::validate_response_time(response, MAX_RESPONSE_TIME)
    }

    /// Inclusive range check
    pub fn validate_range(
        name: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), AssertionFailure> {
        if !(min..=max).contains(&value) {
            return Err(AssertionFailure::OutOfRange {
                name: name.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(())
    }

    pub fn validate_non_negative(name: &str, value: f64) -> Result<(), AssertionFailure> {
        // NaN is not a plausible reading either
        if value.is_nan() || value < 0.0 {
            return Err(AssertionFailure::Negative {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Checks a time axis is non-empty and strictly increasing.
    ///
    /// Hourly timestamps look like `2024-01-15T13:00`, daily ones like `2024-01-15`.
    pub fn validate_time_series(
        name: &str,
        times: &[String],
        granularity: Granularity,
    ) -> Result<(), AssertionFailure> {
        if times.is_empty() {
            return Err(AssertionFailure::EmptySeries {
                name: name.to_string(),
            });
        }

        let parsed = times
            .iter()
            .map(|raw| {
                parse_timestamp(raw, granularity).ok_or_else(|| AssertionFailure::BadTimestamp {
                    name: name.to_string(),
                    value: raw.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(index) = parsed.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(AssertionFailure::UnorderedSeries {
                name: name.to_string(),
                index: index + 1,
            });
        }
        Ok(())
    }

    pub fn validate_same_length(
        name_a: &str,
        len_a: usize,
        name_b: &str,
        len_b: usize,
    ) -> Result<(), AssertionFailure> {
        if len_a != len_b {
            return Err(AssertionFailure::LengthMismatch {
                name_a: name_a.to_string(),
                len_a,
                name_b: name_b.to_string(),
                len_b,
            });
        }
        Ok(())
    }
}

fn parse_timestamp(raw: &str, granularity: Granularity) -> Option<NaiveDateTime> {
    match granularity {
        Granularity::Daily => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
        Granularity::Current | Granularity::Hourly => {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok()
        }
    }
}
