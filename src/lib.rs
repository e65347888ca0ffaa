//! # Restock workspace
//!
//! Umbrella crate over the restock libraries.
//!
//! ## Example
//!
//! ```
//! use restock_workspace::math::{z_score, ZScoreSource};
//!
//! assert_eq!(z_score(0.95, ZScoreSource::Table).unwrap(), 1.65);
//! ```

pub use restock as planning;
pub use restock_forecast as forecast;
pub use restock_math as math;
