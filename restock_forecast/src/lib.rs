//! # Restock Forecast
//!
//! Seasonal demand forecasting for inventory planning.
//!
//! ## Features
//!
//! - Additive Holt-Winters model with fitted smoothing coefficients
//! - Bounded Nelder-Mead optimiser for the coefficient search
//! - Forecast dates that continue the demand series' own date axis
//! - Accuracy scoring (MAE, RMSE, MAPE) of fitted or forecast values
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use restock_forecast::{evaluate, fit_and_forecast};
//! use restock_math::{Frequency, TimeSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let demand: Vec<f64> = (0..28)
//!     .map(|t| 40.0 + 0.5 * t as f64 + [6.0, -2.0, -6.0, 2.0][t % 4])
//!     .collect();
//! let series = TimeSeries::from_values(start, Frequency::Daily, demand)?;
//!
//! // Fit with a four-day cycle and project one week ahead
//! let result = fit_and_forecast(&series, 4, 7)?;
//! assert_eq!(result.horizon(), 7);
//!
//! // Score the in-sample fit
//! let accuracy = evaluate(series.values(), result.fitted_values())?;
//! assert!(accuracy.mae <= accuracy.rmse);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod forecaster;
pub mod metrics;
pub mod models;
pub mod optimize;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::fit_and_forecast;
pub use crate::metrics::{evaluate, AccuracyMetrics};
pub use crate::models::holt_winters::{HoltWinters, SmoothingParams};
pub use crate::models::{ForecastModel, ForecastResult, ForecastRow, TrainedForecastModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
