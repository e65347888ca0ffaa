//! Planner configuration
//!
//! Settings are plain values handed to the forecasting and reorder code. They
//! can come from defaults, a JSON file, and `RESTOCK_*` environment overrides,
//! applied in that order.

use crate::error::{PlanError, Result};
use restock_math::{Frequency, ReorderPolicy, ZScoreSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `seasonal_periods`
pub const ENV_SEASONALITY: &str = "RESTOCK_SEASONALITY";
/// Environment variable overriding `horizon`
pub const ENV_HORIZON: &str = "RESTOCK_HORIZON";
/// Environment variable overriding `lead_time_days`
pub const ENV_LEAD_TIME_DAYS: &str = "RESTOCK_LEAD_TIME_DAYS";
/// Environment variable overriding `service_level`
pub const ENV_SERVICE_LEVEL: &str = "RESTOCK_SERVICE_LEVEL";

/// Parameters for planning one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Length of one demand cycle, in periods
    pub seasonal_periods: usize,
    /// Number of future periods to forecast
    pub horizon: usize,
    /// Replenishment lead time, also the variability window
    pub lead_time_days: usize,
    /// Target probability of not stocking out during lead time
    pub service_level: f64,
    pub z_score_source: ZScoreSource,
    /// Frequency of the input demand series
    pub frequency: Frequency,
    /// Compute reorder records over history followed by the forecast
    pub use_forecast_for_reorder: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seasonal_periods: 12,
            horizon: 30,
            lead_time_days: 7,
            service_level: 0.95,
            z_score_source: ZScoreSource::Table,
            frequency: Frequency::Daily,
            use_forecast_for_reorder: false,
        }
    }
}

impl PlannerConfig {
    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_SEASONALITY) {
            self.seasonal_periods = parse_var(ENV_SEASONALITY, &value)?;
        }
        if let Some(value) = lookup(ENV_HORIZON) {
            self.horizon = parse_var(ENV_HORIZON, &value)?;
        }
        if let Some(value) = lookup(ENV_LEAD_TIME_DAYS) {
            self.lead_time_days = parse_var(ENV_LEAD_TIME_DAYS, &value)?;
        }
        if let Some(value) = lookup(ENV_SERVICE_LEVEL) {
            self.service_level = parse_var(ENV_SERVICE_LEVEL, &value)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings no plan could run with
    pub fn validate(&self) -> Result<()> {
        if self.seasonal_periods == 0 {
            return Err(PlanError::Config(
                "seasonal_periods must be positive".to_string(),
            ));
        }
        if self.horizon == 0 {
            return Err(PlanError::Config("horizon must be positive".to_string()));
        }
        if self.lead_time_days < 2 {
            return Err(PlanError::Config(format!(
                "lead_time_days must be at least 2 to estimate demand variability, got {}",
                self.lead_time_days
            )));
        }
        if !(self.service_level > 0.0 && self.service_level < 1.0) {
            return Err(PlanError::Config(format!(
                "service_level must be between 0 and 1, got {}",
                self.service_level
            )));
        }
        Ok(())
    }

    /// Reorder policy implied by these settings
    pub fn reorder_policy(&self) -> ReorderPolicy {
        ReorderPolicy::new(self.lead_time_days, self.service_level)
            .with_z_score_source(self.z_score_source)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PlanError::Config(format!("{} has an invalid value: {:?}", key, value)))
}
