//! Service level to z-score conversion
//!
//! The planning tables historically only carried three service levels. They
//! remain the default and the values every other lookup is checked against;
//! [`ZScoreSource::InverseNormal`] opens up arbitrary levels through the
//! standard normal quantile function.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Supported service levels and their safety-stock multipliers
pub const Z_SCORE_TABLE: [(f64, f64); 3] = [(0.90, 1.28), (0.95, 1.65), (0.99, 2.33)];

/// Keys are matched exactly; the tolerance only absorbs float representation
/// noise (`0.3 * 3.0` is `0.8999999999999999`), never a nearby level.
const LEVEL_TOLERANCE: f64 = 1e-12;

/// How a service level is turned into a z-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZScoreSource {
    /// Fixed lookup table; any other level is rejected
    #[default]
    Table,
    /// Table values where they exist, inverse standard normal CDF otherwise
    InverseNormal,
}

/// Table z-score for an exactly supported service level
pub fn table_z_score(service_level: f64) -> Option<f64> {
    Z_SCORE_TABLE
        .iter()
        .find(|(level, _)| (level - service_level).abs() < LEVEL_TOLERANCE)
        .map(|&(_, z)| z)
}

/// Resolve the z-score multiplier for `service_level`
pub fn z_score(service_level: f64, source: ZScoreSource) -> Result<f64> {
    if let Some(z) = table_z_score(service_level) {
        return Ok(z);
    }

    match source {
        ZScoreSource::Table => Err(MathError::UnsupportedServiceLevel(service_level)),
        ZScoreSource::InverseNormal => {
            if !(service_level > 0.0 && service_level < 1.0) {
                return Err(MathError::UnsupportedServiceLevel(service_level));
            }
            let normal = Normal::new(0.0, 1.0)
                .map_err(|e| MathError::InvalidInput(format!("standard normal: {}", e)))?;
            Ok(normal.inverse_cdf(service_level))
        }
    }
}
