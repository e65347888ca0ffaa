//! CSV input of demand history and output of plan tables
//!
//! Input rows carry `date` and `demand` columns, plus an optional `item_id`
//! column when the file holds several items. Header names are matched either
//! in snake case or as the title-case export headers (`Date`, `Demand`,
//! `Item ID`).

use crate::error::{PlanError, Result};
use crate::plan::ItemPlan;
use chrono::NaiveDate;
use restock_math::{Frequency, TimeSeries};
use serde::Deserialize;
use std::io::{Read, Write};
use tracing::debug;

/// One row of a demand file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemandRecord {
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    /// Empty cells are read as missing and rejected when the series is built
    #[serde(alias = "Demand")]
    pub demand: Option<f64>,
    #[serde(default, alias = "Item ID")]
    pub item_id: Option<String>,
}

/// Read every row of a demand file
pub fn read_records<R: Read>(reader: R) -> Result<Vec<DemandRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<DemandRecord>, csv::Error>>()?;
    debug!(rows = records.len(), "read demand records");
    Ok(records)
}

/// Read the demand series of one item.
///
/// With `item` set only rows carrying that id are kept. Without it the file
/// must not mix items.
pub fn read_demand<R: Read>(
    reader: R,
    item: Option<&str>,
    frequency: Frequency,
) -> Result<TimeSeries> {
    let records = read_records(reader)?;

    let selected: Vec<DemandRecord> = match item {
        Some(id) => records
            .into_iter()
            .filter(|r| r.item_id.as_deref() == Some(id))
            .collect(),
        None => {
            let mut ids = records.iter().filter_map(|r| r.item_id.as_deref());
            if let Some(first) = ids.next() {
                if let Some(other) = ids.find(|id| *id != first) {
                    return Err(PlanError::Input(format!(
                        "file holds several items ({}, {}); select one",
                        first, other
                    )));
                }
            }
            records
        }
    };

    if selected.is_empty() {
        return Err(PlanError::Input(match item {
            Some(id) => format!("no demand rows for item {}", id),
            None => "no demand rows".to_string(),
        }));
    }

    let observations = selected.into_iter().map(|r| (r.date, r.demand)).collect();
    Ok(TimeSeries::from_observations(observations, frequency)?)
}

/// Write the plan table with a header row; undefined values are left empty
pub fn write_plan<W: Write>(writer: W, plan: &ItemPlan) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in plan.rows()? {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
