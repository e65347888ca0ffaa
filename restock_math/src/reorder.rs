//! Rolling safety stock and reorder point
//!
//! For every date with a full lead-time window of demand behind it:
//!
//! ```text
//! daily_std_dev = sample std dev of the window
//! safety_stock  = z(service_level) * daily_std_dev * sqrt(lead_time_days)
//! reorder_point = mean(window) * lead_time_days + safety_stock
//! ```
//!
//! Dates without a full window get no record at all.

use crate::series::TimeSeries;
use crate::service_level::{z_score, ZScoreSource};
use crate::stats::{mean, sample_std_dev};
use crate::{MathError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lead time and service target for reorder calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReorderPolicy {
    /// Days between placing and receiving an order; also the rolling window size
    pub lead_time_days: usize,
    /// Target probability of not stocking out during the lead time
    pub service_level: f64,
    #[serde(default)]
    pub z_score_source: ZScoreSource,
}

impl ReorderPolicy {
    /// Create a policy that uses the fixed z-score table
    pub fn new(lead_time_days: usize, service_level: f64) -> Self {
        Self {
            lead_time_days,
            service_level,
            z_score_source: ZScoreSource::Table,
        }
    }

    pub fn with_z_score_source(mut self, source: ZScoreSource) -> Self {
        self.z_score_source = source;
        self
    }

    /// Z-score multiplier implied by the service level
    pub fn z_score(&self) -> Result<f64> {
        z_score(self.service_level, self.z_score_source)
    }
}

/// Inventory control values for one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReorderRecord {
    pub date: NaiveDate,
    /// Sample standard deviation of demand over the trailing window
    pub daily_std_dev: f64,
    /// Mean demand over the trailing window
    pub mean_daily_demand: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
}

/// Calculator for rolling safety stock and reorder points
#[derive(Debug, Clone)]
pub struct ReorderCalculator {
    policy: ReorderPolicy,
    z: f64,
}

impl ReorderCalculator {
    /// Create a calculator, resolving the service level up front
    pub fn new(policy: ReorderPolicy) -> Result<Self> {
        if policy.lead_time_days < 2 {
            return Err(MathError::InvalidInput(format!(
                "Lead time must be at least 2 days to estimate demand variability, got {}",
                policy.lead_time_days
            )));
        }
        let z = policy.z_score()?;

        Ok(Self { policy, z })
    }

    pub fn policy(&self) -> &ReorderPolicy {
        &self.policy
    }

    /// Z-score multiplier in use
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Records for every date that ends a full lead-time window, in date order
    pub fn compute(&self, series: &TimeSeries) -> Vec<ReorderRecord> {
        let lead_time = self.policy.lead_time_days;
        let lead_time_sqrt = (lead_time as f64).sqrt();

        let records: Vec<ReorderRecord> = series
            .values()
            .windows(lead_time)
            .zip(series.dates()[lead_time.min(series.len()).saturating_sub(1)..].iter())
            .filter_map(|(window, &date)| {
                let daily_std_dev = sample_std_dev(window)?;
                let mean_daily_demand = mean(window)?;
                let safety_stock = self.z * daily_std_dev * lead_time_sqrt;

                Some(ReorderRecord {
                    date,
                    daily_std_dev,
                    mean_daily_demand,
                    safety_stock,
                    reorder_point: mean_daily_demand * lead_time as f64 + safety_stock,
                })
            })
            .collect();

        debug!(
            observations = series.len(),
            records = records.len(),
            lead_time_days = lead_time,
            z = self.z,
            "computed reorder records"
        );

        records
    }

    /// Record for the last date of the series, if it has a full window
    pub fn latest(&self, series: &TimeSeries) -> Option<ReorderRecord> {
        let lead_time = self.policy.lead_time_days;
        if series.len() < lead_time {
            return None;
        }
        let tail = series.between(series.dates()[series.len() - lead_time], NaiveDate::MAX);
        self.compute(&tail).pop()
    }
}

/// Rolling reorder records for `series` under the fixed z-score table
pub fn compute(
    series: &TimeSeries,
    lead_time_days: usize,
    service_level: f64,
) -> Result<Vec<ReorderRecord>> {
    let calculator = ReorderCalculator::new(ReorderPolicy::new(lead_time_days, service_level))?;
    Ok(calculator.compute(series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Frequency;
    use approx::assert_relative_eq;

    fn demand(values: Vec<f64>) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        TimeSeries::from_values(start, Frequency::Daily, values).unwrap()
    }

    #[test]
    fn test_single_window() {
        let series = demand(vec![10.0, 12.0, 8.0, 14.0, 9.0, 11.0, 13.0]);
        let records = compute(&series, 7, 0.95).unwrap();

        assert_eq!(records.len(), 1);
        let record = records[0];
        let std_dev = (28.0_f64 / 6.0).sqrt();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_relative_eq!(record.mean_daily_demand, 11.0);
        assert_relative_eq!(record.daily_std_dev, std_dev);
        assert_relative_eq!(record.safety_stock, 1.65 * std_dev * 7.0_f64.sqrt());
        assert_relative_eq!(record.reorder_point, 77.0 + 1.65 * std_dev * 7.0_f64.sqrt());
    }

    #[test]
    fn test_leading_dates_have_no_record() {
        let series = demand(vec![5.0, 7.0, 6.0, 9.0, 4.0]);
        let records = compute(&series, 3, 0.90).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, series.dates()[2]);
        assert_eq!(records[2].date, series.dates()[4]);
        assert_relative_eq!(records[1].mean_daily_demand, 22.0 / 3.0);
    }

    #[test]
    fn test_series_shorter_than_lead_time() {
        let series = demand(vec![5.0, 7.0]);
        assert!(compute(&series, 7, 0.95).unwrap().is_empty());
        assert!(compute(&demand(Vec::new()), 7, 0.95).unwrap().is_empty());
    }

    #[test]
    fn test_flat_demand_needs_no_safety_stock() {
        let series = demand(vec![4.0; 10]);
        for record in compute(&series, 5, 0.99).unwrap() {
            assert_relative_eq!(record.safety_stock, 0.0);
            assert_relative_eq!(record.reorder_point, 20.0);
        }
    }

    #[test]
    fn test_unsupported_service_level() {
        let series = demand(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            compute(&series, 2, 0.97),
            Err(MathError::UnsupportedServiceLevel(0.97))
        );
    }

    #[test]
    fn test_inverse_normal_policy_accepts_other_levels() {
        let policy = ReorderPolicy::new(3, 0.97).with_z_score_source(ZScoreSource::InverseNormal);
        let calculator = ReorderCalculator::new(policy).unwrap();
        assert!(calculator.z() > 1.65 && calculator.z() < 2.33);
    }

    #[test]
    fn test_lead_time_of_one_is_rejected() {
        assert!(matches!(
            ReorderCalculator::new(ReorderPolicy::new(1, 0.95)),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_latest_matches_last_record() {
        let series = demand(vec![3.0, 8.0, 2.0, 9.0, 4.0, 6.0, 1.0, 7.0]);
        let calculator = ReorderCalculator::new(ReorderPolicy::new(4, 0.95)).unwrap();

        let all = calculator.compute(&series);
        assert_eq!(calculator.latest(&series), all.last().copied());
        assert_eq!(calculator.latest(&demand(vec![1.0, 2.0])), None);
    }
}
