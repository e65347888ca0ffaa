//! Plan one item from a demand CSV and print the plan table as CSV
//!
//! Usage: restock-plan <demand.csv> [--config planner.json] [--item ID]

use anyhow::Context;
use clap::Parser;
use restock::csv_io::{read_demand, write_plan};
use restock::{observability, plan_item, PlannerConfig};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[clap(name = "restock-plan")]
#[clap(about = "Forecast one item's demand and compute its reorder points")]
#[clap(version)]
struct Args {
    /// Demand CSV with date and demand columns
    input: PathBuf,

    /// JSON planner configuration
    #[clap(long)]
    config: Option<PathBuf>,

    /// Item to plan when the file holds several
    #[clap(long)]
    item: Option<String>,
}

fn main() -> anyhow::Result<()> {
    observability::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PlannerConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    }
    .apply_env()?;

    let file = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let history = read_demand(BufReader::new(file), args.item.as_deref(), config.frequency)?;

    let item_id = args.item.as_deref().unwrap_or("item");
    let plan = plan_item(item_id, history, &config)?;

    match plan.accuracy() {
        Some(accuracy) => info!(
            mae = accuracy.mae,
            rmse = accuracy.rmse,
            mape = accuracy.mape,
            "fit accuracy"
        ),
        None => info!("fit accuracy undefined for this history"),
    }
    if let Some(latest) = plan.latest_reorder() {
        info!(
            date = %latest.date,
            safety_stock = latest.safety_stock,
            reorder_point = latest.reorder_point,
            "latest reorder point"
        );
    }

    write_plan(BufWriter::new(io::stdout().lock()), &plan)?;
    Ok(())
}
