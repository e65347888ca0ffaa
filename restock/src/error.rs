//! Error types for the restock crate

use restock_forecast::ForecastError;
use restock_math::MathError;
use thiserror::Error;

/// Errors raised while planning an item
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Math(#[from] MathError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Demand input that cannot be turned into a single item's series
    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;
