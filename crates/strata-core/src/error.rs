// File: crates/strata-core/src/error.rs
// Summary: Error taxonomy for configuration and window lookup failures.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Value range where `top <= bottom` (or either bound is not finite).
    #[error("invalid value range: bottom {bottom} must be below top {top}")]
    InvalidValueRange { bottom: f64, top: f64 },

    /// Time range where `right <= left`.
    #[error("invalid time range: {left} must be before {right}")]
    InvalidTimeRange { left: DateTime<Utc>, right: DateTime<Utc> },

    #[error("invalid height percent {0}: must be finite and positive")]
    InvalidHeightPercent(f64),

    #[error("window {0} already exists")]
    DuplicateWindow(String),

    #[error("window {0} not found")]
    WindowNotFound(String),

    #[error("invalid candle: {0}")]
    InvalidCandle(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
