//! Per-item planning: forecast, fit accuracy and reorder records
//!
//! Each item is planned independently from its own demand series. A plan holds
//! no references to shared state, so separate items can be planned on separate
//! threads without coordination.

use crate::config::PlannerConfig;
use crate::error::Result;
use chrono::NaiveDate;
use restock_forecast::metrics::evaluate_fit;
use restock_forecast::{fit_and_forecast, AccuracyMetrics, ForecastError, ForecastResult};
use restock_math::{ReorderCalculator, ReorderRecord, TimeSeries};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Forecast and inventory control values for one item
#[derive(Debug, Clone)]
pub struct ItemPlan {
    item_id: String,
    history: TimeSeries,
    forecast: ForecastResult,
    accuracy: Option<AccuracyMetrics>,
    reorder: Vec<ReorderRecord>,
}

/// One line of the plan table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRow {
    pub item_id: String,
    pub date: NaiveDate,
    pub demand: Option<f64>,
    pub forecast: f64,
    pub daily_std_dev: Option<f64>,
    pub safety_stock: Option<f64>,
    pub reorder_point: Option<f64>,
}

/// Plan one item from its demand history.
///
/// Fit accuracy is left empty when MAPE is undefined (all-zero demand); every
/// other failure is returned.
#[instrument(skip(history, config), fields(observations = history.len()))]
pub fn plan_item(item_id: &str, history: TimeSeries, config: &PlannerConfig) -> Result<ItemPlan> {
    config.validate()?;

    let forecast = fit_and_forecast(&history, config.seasonal_periods, config.horizon)?;

    let accuracy = match evaluate_fit(&history, &forecast) {
        Ok(metrics) => Some(metrics),
        Err(ForecastError::UndefinedMetric(reason)) => {
            warn!(%reason, "skipping fit accuracy");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let calculator = ReorderCalculator::new(config.reorder_policy())?;
    let reorder = if config.use_forecast_for_reorder {
        calculator.compute(&forecast.extend_demand(&history)?)
    } else {
        calculator.compute(&history)
    };

    info!(
        horizon = forecast.horizon(),
        reorder_records = reorder.len(),
        mae = accuracy.map(|a| a.mae),
        "item planned"
    );

    Ok(ItemPlan {
        item_id: item_id.to_string(),
        history,
        forecast,
        accuracy,
        reorder,
    })
}

impl ItemPlan {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn history(&self) -> &TimeSeries {
        &self.history
    }

    pub fn forecast(&self) -> &ForecastResult {
        &self.forecast
    }

    /// In-sample fit accuracy, if defined for this history
    pub fn accuracy(&self) -> Option<&AccuracyMetrics> {
        self.accuracy.as_ref()
    }

    pub fn reorder_records(&self) -> &[ReorderRecord] {
        &self.reorder
    }

    /// Most recent reorder record
    pub fn latest_reorder(&self) -> Option<&ReorderRecord> {
        self.reorder.last()
    }

    /// Combined table: history and forecast dates, with reorder values where defined
    pub fn rows(&self) -> Result<Vec<PlanRow>> {
        let by_date: HashMap<NaiveDate, &ReorderRecord> =
            self.reorder.iter().map(|r| (r.date, r)).collect();

        let rows = self
            .forecast
            .to_rows(&self.history)?
            .into_iter()
            .map(|row| {
                let record = by_date.get(&row.date);
                PlanRow {
                    item_id: self.item_id.clone(),
                    date: row.date,
                    demand: row.demand,
                    forecast: row.forecast,
                    daily_std_dev: record.map(|r| r.daily_std_dev),
                    safety_stock: record.map(|r| r.safety_stock),
                    reorder_point: record.map(|r| r.reorder_point),
                }
            })
            .collect();

        Ok(rows)
    }
}
