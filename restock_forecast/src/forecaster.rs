//! One-call seasonal demand forecasting

use crate::error::{ForecastError, Result};
use crate::models::holt_winters::HoltWinters;
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use restock_math::TimeSeries;
use tracing::info;

/// Fit an additive Holt-Winters model to `series` and project `horizon` periods.
///
/// Fails with [`ForecastError::InsufficientData`] when the series is shorter
/// than two seasonal cycles.
///
/// ```
/// use chrono::NaiveDate;
/// use restock_forecast::fit_and_forecast;
/// use restock_math::{Frequency, TimeSeries};
///
/// let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let demand: Vec<f64> = (0..24).map(|t| 50.0 + (t % 12) as f64).collect();
/// let series = TimeSeries::from_values(start, Frequency::Monthly, demand).unwrap();
///
/// let result = fit_and_forecast(&series, 12, 6).unwrap();
/// assert_eq!(result.fitted_values().len(), 24);
/// assert_eq!(result.future_dates()[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn fit_and_forecast(
    series: &TimeSeries,
    seasonal_periods: usize,
    horizon: usize,
) -> Result<ForecastResult> {
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "Forecast horizon must be positive".to_string(),
        ));
    }

    let model = HoltWinters::new(seasonal_periods)?;
    let trained = model.train(series)?;
    let result = trained.forecast(horizon)?;

    info!(
        model = trained.name(),
        observations = series.len(),
        horizon,
        sse = trained.sse(),
        "forecast generated"
    );

    Ok(result)
}
