//! Error types for the restock_forecast crate

use restock_math::MathError;
use thiserror::Error;

/// Custom error types for the restock_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// History too short to estimate the model
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Actual and predicted sequences are not aligned
    #[error("Length mismatch: {actual} actual values vs {predicted} predicted values")]
    LengthMismatch { actual: usize, predicted: usize },

    /// Metric has no defined value for the given input
    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from the underlying series or statistics
    #[error(transparent)]
    Math(#[from] MathError),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
