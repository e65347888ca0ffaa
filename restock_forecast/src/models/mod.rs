//! Forecasting models for demand series

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use restock_math::TimeSeries;
use serde::Serialize;
use std::fmt::Debug;

/// In-sample fit plus out-of-sample projection of a demand series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Dates of the training series
    dates: Vec<NaiveDate>,
    /// One-step-ahead fitted values, aligned with `dates`
    fitted: Vec<f64>,
    /// Dates following the training series at its frequency
    future_dates: Vec<NaiveDate>,
    /// Forecasted values, aligned with `future_dates`
    future_values: Vec<f64>,
}

/// One line of the combined history and forecast table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastRow {
    pub date: NaiveDate,
    /// Observed demand; `None` for forecast-only dates
    pub demand: Option<f64>,
    pub forecast: f64,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(
        dates: Vec<NaiveDate>,
        fitted: Vec<f64>,
        future_dates: Vec<NaiveDate>,
        future_values: Vec<f64>,
    ) -> Result<Self> {
        if dates.len() != fitted.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Fitted length ({}) doesn't match history length ({})",
                fitted.len(),
                dates.len()
            )));
        }
        if future_dates.len() != future_values.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Forecast length ({}) doesn't match horizon ({})",
                future_values.len(),
                future_dates.len()
            )));
        }

        Ok(Self {
            dates,
            fitted,
            future_dates,
            future_values,
        })
    }

    /// Get the in-sample fitted values
    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    /// Get the dates the fitted values belong to
    pub fn fitted_dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Get the forecasted values
    pub fn future_values(&self) -> &[f64] {
        &self.future_values
    }

    /// Get the forecast dates
    pub fn future_dates(&self) -> &[NaiveDate] {
        &self.future_dates
    }

    /// Forecast as `(date, value)` pairs
    pub fn future_forecast(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.future_dates
            .iter()
            .copied()
            .zip(self.future_values.iter().copied())
    }

    /// Number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.future_values.len()
    }

    /// History rows with demand and fitted value, then forecast-only rows
    pub fn to_rows(&self, history: &TimeSeries) -> Result<Vec<ForecastRow>> {
        self.check_history(history)?;

        let past = history
            .iter()
            .zip(self.fitted.iter())
            .map(|((date, demand), &forecast)| ForecastRow {
                date,
                demand: Some(demand),
                forecast,
            });
        let future = self.future_forecast().map(|(date, forecast)| ForecastRow {
            date,
            demand: None,
            forecast,
        });

        Ok(past.chain(future).collect())
    }

    /// History followed by the forecast, as a single demand series
    pub fn extend_demand(&self, history: &TimeSeries) -> Result<TimeSeries> {
        self.check_history(history)?;
        Ok(history.extended(&self.future_values)?)
    }

    /// Serialize the forecast to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn check_history(&self, history: &TimeSeries) -> Result<()> {
        if history.dates() != self.dates.as_slice() {
            return Err(ForecastError::InvalidParameter(
                "History does not match the series this forecast was fitted on".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// One-step-ahead reconstruction of the training series
    fn fitted_values(&self) -> &[f64];

    /// Project `horizon` periods past the training data
    fn forecast(&self, horizon: usize) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a demand series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a demand series
    fn train(&self, series: &TimeSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod holt_winters;
