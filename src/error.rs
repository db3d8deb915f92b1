use thiserror::Error;

/// Errors surfaced by the client and the check scenarios
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport-level failure (timeout, DNS, connection refused, body read)
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A response violated an expected contract
    #[error("Assertion failed: {0}")]
    Assertion(#[from] AssertionFailure),

    /// A valid JSON body did not match the forecast response shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A violated expectation about a response, with expected and actual values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssertionFailure {
    #[error("Expected status {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    #[error("Response time exceeded {max_secs:.2}s. Actual: {actual_secs:.2}s")]
    ResponseTimeExceeded { max_secs: f64, actual_secs: f64 },

    #[error("Response is not valid JSON")]
    InvalidJson,

    #[error("Response should contain '{path}' field")]
    MissingField { path: String },

    #[error("Field '{path}' should be {expected}")]
    UnexpectedType { path: String, expected: &'static str },

    #[error("{name} {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name} cannot be negative: {value}")]
    Negative { name: String, value: f64 },

    #[error("{name} should have data points")]
    EmptySeries { name: String },

    #[error("{name} is not in increasing order at index {index}")]
    UnorderedSeries { name: String, index: usize },

    #[error("{name} contains an unparseable timestamp: {value}")]
    BadTimestamp { name: String, value: String },

    #[error("{name_a} has {len_a} entries but {name_b} has {len_b}")]
    LengthMismatch {
        name_a: String,
        len_a: usize,
        name_b: String,
        len_b: usize,
    },
}
