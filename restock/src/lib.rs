//! # Restock
//!
//! Per-item inventory planning: a seasonal demand forecast, its in-sample
//! accuracy and rolling safety stock / reorder point records, built from one
//! item's demand history.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use restock::{plan_item, ItemSummary, PlannerConfig};
//! use restock::restock_math::{Frequency, TimeSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let demand: Vec<f64> = (0..28).map(|t| 20.0 + [4.0, -1.0, -3.0, 0.0][t % 4]).collect();
//! let history = TimeSeries::from_values(start, Frequency::Daily, demand)?;
//!
//! let config = PlannerConfig {
//!     seasonal_periods: 4,
//!     horizon: 8,
//!     ..PlannerConfig::default()
//! };
//! let plan = plan_item("SKU-1", history, &config)?;
//! assert_eq!(plan.forecast().horizon(), 8);
//!
//! let end = NaiveDate::from_ymd_opt(2024, 1, 28).unwrap();
//! let summary = ItemSummary::from_plan(&plan, start, end);
//! assert!(summary.reorder_point.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod csv_io;
pub mod error;
pub mod observability;
pub mod plan;
pub mod summary;

pub use crate::config::PlannerConfig;
pub use crate::error::{PlanError, Result};
pub use crate::plan::{plan_item, ItemPlan, PlanRow};
pub use crate::summary::ItemSummary;

pub use restock_forecast;
pub use restock_math;
