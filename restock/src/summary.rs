//! Key metrics of an item plan over a date range

use crate::plan::ItemPlan;
use chrono::NaiveDate;
use restock_math::stats::mean;
use serde::Serialize;
use std::fmt;

/// Total demand, average demand and latest reorder point for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub item_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Sum of observed demand in range; zero when the range holds no observations
    pub total_demand: f64,
    /// Mean observed demand per period in range
    pub average_daily_demand: Option<f64>,
    /// Reorder point of the last record dated in range
    pub reorder_point: Option<f64>,
}

impl ItemSummary {
    /// Summarise `plan` over `start..=end`
    pub fn from_plan(plan: &ItemPlan, start: NaiveDate, end: NaiveDate) -> Self {
        let observed = plan.history().between(start, end);
        let reorder_point = plan
            .reorder_records()
            .iter()
            .rev()
            .find(|r| r.date >= start && r.date <= end)
            .map(|r| r.reorder_point);

        Self {
            item_id: plan.item_id().to_string(),
            start,
            end,
            total_demand: observed.values().iter().sum(),
            average_daily_demand: mean(observed.values()),
            reorder_point,
        }
    }
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} to {})", self.item_id, self.start, self.end)?;
        writeln!(f, "  Total Demand:          {:.0} units", self.total_demand)?;
        match self.average_daily_demand {
            Some(avg) => writeln!(f, "  Average Daily Demand:  {:.2} units/day", avg)?,
            None => writeln!(f, "  Average Daily Demand:  n/a")?,
        }
        match self.reorder_point {
            Some(rop) => writeln!(f, "  Reorder Point:         {:.0} units", rop)?,
            None => writeln!(f, "  Reorder Point:         n/a")?,
        }
        Ok(())
    }
}
