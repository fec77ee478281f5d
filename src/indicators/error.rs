//! Error taxonomy shared by the indicator, signal and level operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid numeric format for field: {0}")]
    InvalidNumericFormat(String),

    #[error("Invalid bar at index {index}: {reason}")]
    InvalidSeries { index: usize, reason: String },

    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    #[error("Insufficient data: need at least {required} bars, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("Failed to compute {indicator} at bar {index}")]
    ComputeFailure { indicator: String, index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
