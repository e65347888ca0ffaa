//! # Restock Math
//!
//! Numerical building blocks for inventory planning.
//! This crate provides the validated demand [`TimeSeries`], descriptive
//! statistics over windows of demand, the service-level z-score lookup and
//! the rolling safety-stock / reorder-point calculator.

use thiserror::Error;

pub mod reorder;
pub mod series;
pub mod service_level;
pub mod stats;

pub use crate::reorder::{ReorderCalculator, ReorderPolicy, ReorderRecord};
pub use crate::series::{Frequency, TimeSeries};
pub use crate::service_level::{z_score, ZScoreSource};

/// Errors that can occur in inventory math calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    #[error("Unsupported service level: {0} (supported: 0.90, 0.95, 0.99)")]
    UnsupportedServiceLevel(f64),

    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for inventory math operations
pub type Result<T> = std::result::Result<T, MathError>;
