//! Checks for the Open-Meteo forecast API.
//!
//! A pooled HTTP client, a table of fixed test constants, and stateless validators
//! for status code, latency, JSON well-formedness and plausible weather values.

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod scenarios;
pub mod validator;

pub use client::{ApiResponse, HttpResponse, OpenMeteoClient, ParamValue, QueryParams};
pub use config::{ApiConfig, City};
pub use error::{AppError, AssertionFailure};
pub use forecast::{ForecastResponse, Granularity, forecast_params};
pub use validator::ResponseValidator;
