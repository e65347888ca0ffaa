//! Date-indexed demand series
//!
//! A [`TimeSeries`] is an ordered run of `(date, value)` observations at a fixed
//! [`Frequency`]. Construction validates the date axis: dates must be strictly
//! increasing, unique and contiguous at the series frequency. Nothing is
//! reordered, deduplicated or gap-filled here; that is left to whoever prepares
//! the data.

use crate::{MathError, Result};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sampling frequency of a demand series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One observation per calendar day
    #[default]
    Daily,
    /// One observation every seven days
    Weekly,
    /// One observation per calendar month, counted from the first date
    Monthly,
}

impl Frequency {
    /// Date lying `steps` periods after `origin`, or `None` on calendar overflow.
    ///
    /// Monthly steps are always taken from the origin, so a series anchored on
    /// the 31st stays on month ends instead of drifting to the 28th.
    pub fn advance(self, origin: NaiveDate, steps: u32) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => origin.checked_add_days(Days::new(u64::from(steps))),
            Frequency::Weekly => origin.checked_add_days(Days::new(7 * u64::from(steps))),
            Frequency::Monthly => origin.checked_add_months(Months::new(steps)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

/// Validated, date-indexed series of demand values
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
    frequency: Frequency,
    /// Anchor of the date axis and the position of `dates[0]` relative to it
    origin: NaiveDate,
    origin_offset: u32,
}

impl TimeSeries {
    /// Create a daily series from `(date, value)` pairs
    pub fn new(points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        Self::with_frequency(points, Frequency::Daily)
    }

    /// Create a series at the given frequency from `(date, value)` pairs
    pub fn with_frequency(points: Vec<(NaiveDate, f64)>, frequency: Frequency) -> Result<Self> {
        let (dates, values): (Vec<NaiveDate>, Vec<f64>) = points.into_iter().unzip();
        Self::from_parts(dates, values, frequency)
    }

    /// Create a series from observations that may be missing.
    ///
    /// A missing value is rejected rather than filled.
    pub fn from_observations(
        observations: Vec<(NaiveDate, Option<f64>)>,
        frequency: Frequency,
    ) -> Result<Self> {
        let mut points = Vec::with_capacity(observations.len());
        for (date, value) in observations {
            match value {
                Some(v) => points.push((date, v)),
                None => {
                    return Err(MathError::InvalidSeries(format!(
                        "missing demand value on {}",
                        date
                    )))
                }
            }
        }
        Self::with_frequency(points, frequency)
    }

    /// Create a series of consecutive periods starting at `start`
    pub fn from_values(start: NaiveDate, frequency: Frequency, values: Vec<f64>) -> Result<Self> {
        let dates = (0..values.len())
            .map(|i| step_from(frequency, start, i))
            .collect::<Result<Vec<_>>>()?;
        Self::from_parts(dates, values, frequency)
    }

    fn from_parts(dates: Vec<NaiveDate>, values: Vec<f64>, frequency: Frequency) -> Result<Self> {
        let origin = dates.first().copied().unwrap_or(NaiveDate::MIN);
        Self::anchored(dates, values, frequency, origin, 0)
    }

    fn anchored(
        dates: Vec<NaiveDate>,
        values: Vec<f64>,
        frequency: Frequency,
        origin: NaiveDate,
        origin_offset: u32,
    ) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(MathError::InvalidInput(format!(
                "Dates length ({}) doesn't match values length ({})",
                dates.len(),
                values.len()
            )));
        }

        if let Some((date, value)) = dates
            .iter()
            .zip(values.iter())
            .find(|(_, v)| !v.is_finite())
        {
            return Err(MathError::InvalidSeries(format!(
                "non-finite demand value {} on {}",
                value, date
            )));
        }

        for (i, window) in dates.windows(2).enumerate() {
            let (prev, current) = (window[0], window[1]);
            if current == prev {
                return Err(MathError::InvalidSeries(format!("duplicate date {}", current)));
            }
            if current < prev {
                return Err(MathError::InvalidSeries(format!(
                    "dates not increasing: {} follows {}",
                    current, prev
                )));
            }
            let expected = step_from(frequency, origin, origin_offset as usize + i + 1)?;
            if current != expected {
                return Err(MathError::InvalidSeries(format!(
                    "gap in {} series: expected {} after {}, found {}",
                    frequency, expected, prev, current
                )));
            }
        }

        Ok(Self {
            dates,
            values,
            frequency,
            origin,
            origin_offset,
        })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Iterate over `(date, value)` pairs in date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// Dates of the `horizon` periods immediately following the last observation
    pub fn future_dates(&self, horizon: usize) -> Result<Vec<NaiveDate>> {
        if self.is_empty() {
            return Err(MathError::InsufficientData(
                "Cannot extend the date axis of an empty series".to_string(),
            ));
        }

        let start = self.origin_offset as usize + self.len();
        (start..start + horizon)
            .map(|i| step_from(self.frequency, self.origin, i))
            .collect()
    }

    /// Copy of this series followed by `values` on the next periods
    pub fn extended(&self, values: &[f64]) -> Result<TimeSeries> {
        let future = self.future_dates(values.len())?;
        let mut points: Vec<(NaiveDate, f64)> = self.iter().collect();
        points.extend(future.into_iter().zip(values.iter().copied()));

        let (dates, values): (Vec<NaiveDate>, Vec<f64>) = points.into_iter().unzip();
        Self::anchored(dates, values, self.frequency, self.origin, self.origin_offset)
    }

    /// Observations with `start <= date <= end`
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> TimeSeries {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end).max(lo);

        TimeSeries {
            dates: self.dates[lo..hi].to_vec(),
            values: self.values[lo..hi].to_vec(),
            frequency: self.frequency,
            origin: self.origin,
            origin_offset: self.origin_offset + lo as u32,
        }
    }
}

fn step_from(frequency: Frequency, origin: NaiveDate, steps: usize) -> Result<NaiveDate> {
    u32::try_from(steps)
        .ok()
        .and_then(|s| frequency.advance(origin, s))
        .ok_or_else(|| {
            MathError::InvalidInput(format!(
                "date {} periods after {} is out of range",
                steps, origin
            ))
        })
}
