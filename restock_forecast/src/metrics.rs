//! Metrics for evaluating forecast accuracy

use crate::error::{ForecastError, Result};
use crate::models::ForecastResult;
use restock_math::TimeSeries;
use serde::Serialize;

/// Forecast accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, over non-zero actuals only
    pub mape: f64,
}

impl std::fmt::Display for AccuracyMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.2}", self.mae)?;
        writeln!(f, "  RMSE:  {:.2}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.2}%", self.mape)?;
        Ok(())
    }
}

/// Score `predicted` against positionally aligned `actual` values
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    Ok(AccuracyMetrics {
        mae: mean_absolute_error(actual, predicted)?,
        rmse: root_mean_squared_error(actual, predicted)?,
        mape: mean_absolute_percentage_error(actual, predicted)?,
    })
}

/// Score a forecast's in-sample fit against the series it was fitted on
pub fn evaluate_fit(series: &TimeSeries, result: &ForecastResult) -> Result<AccuracyMetrics> {
    if series.dates() != result.fitted_dates() {
        return Err(ForecastError::LengthMismatch {
            actual: series.len(),
            predicted: result.fitted_values().len(),
        });
    }
    evaluate(series.values(), result.fitted_values())
}

/// Mean of absolute differences
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let errors = errors(actual, predicted)?;
    Ok(errors.iter().map(|e| e.abs()).sum::<f64>() / errors.len() as f64)
}

/// Square root of the mean of squared differences
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let errors = errors(actual, predicted)?;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / errors.len() as f64;
    Ok(mse.sqrt())
}

/// Mean of `|actual - predicted| / |actual| * 100` over indices where `actual != 0`.
///
/// Fails with [`ForecastError::UndefinedMetric`] when every actual value is zero.
pub fn mean_absolute_percentage_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let errors = errors(actual, predicted)?;

    let (sum, count) = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .fold((0.0, 0usize), |(sum, count), (&a, &e)| {
            (sum + e.abs() / a.abs(), count + 1)
        });

    if count == 0 {
        return Err(ForecastError::UndefinedMetric(
            "MAPE is undefined when every actual value is zero".to_string(),
        ));
    }
    Ok(sum / count as f64 * 100.0)
}

fn errors(actual: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
    if actual.len() != predicted.len() {
        return Err(ForecastError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(ForecastError::UndefinedMetric(
            "no observations to evaluate".to_string(),
        ));
    }

    Ok(actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| a - p)
        .collect())
}
