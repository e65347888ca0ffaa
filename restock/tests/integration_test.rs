use approx::assert_relative_eq;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use restock::csv_io::{read_demand, write_plan};
use restock::restock_math::Frequency;
use restock::{plan_item, ItemSummary, PlanError, PlannerConfig};
use std::fs::File;
use std::io::Write;
use tempfile::NamedTempFile;

const WINDOW: [f64; 7] = [10.0, 12.0, 8.0, 14.0, 9.0, 11.0, 13.0];

fn demand_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Item ID,Demand").unwrap();
    for (i, value) in WINDOW.iter().chain(WINDOW.iter()).enumerate() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1 + i as u32).unwrap();
        writeln!(file, "{},WIDGET,{}", date, value).unwrap();
        writeln!(file, "{},GADGET,{}", date, value * 3.0).unwrap();
    }
    file
}

fn config() -> PlannerConfig {
    PlannerConfig {
        seasonal_periods: 7,
        horizon: 5,
        lead_time_days: 7,
        service_level: 0.95,
        ..PlannerConfig::default()
    }
}

#[test]
fn test_csv_to_plan() {
    let file = demand_file();
    let history = read_demand(
        File::open(file.path()).unwrap(),
        Some("WIDGET"),
        Frequency::Daily,
    )
    .unwrap();
    assert_eq!(history.len(), 14);

    let plan = plan_item("WIDGET", history, &config()).unwrap();
    let latest = plan.latest_reorder().unwrap();

    let std_dev = (28.0_f64 / 6.0).sqrt();
    assert_eq!(latest.date, NaiveDate::from_ymd_opt(2024, 4, 14).unwrap());
    assert_relative_eq!(latest.mean_daily_demand, 11.0, epsilon = 1e-12);
    assert_relative_eq!(latest.daily_std_dev, std_dev, epsilon = 1e-12);
    assert_relative_eq!(latest.safety_stock, 1.65 * std_dev * 7f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(
        latest.reorder_point,
        77.0 + 1.65 * std_dev * 7f64.sqrt(),
        epsilon = 1e-9
    );
}

#[test]
fn test_plan_table_csv_output() {
    let file = demand_file();
    let history = read_demand(
        File::open(file.path()).unwrap(),
        Some("GADGET"),
        Frequency::Daily,
    )
    .unwrap();
    let plan = plan_item("GADGET", history, &config()).unwrap();

    let mut out = Vec::new();
    write_plan(&mut out, &plan).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "item_id,date,demand,forecast,daily_std_dev,safety_stock,reorder_point"
    );
    assert_eq!(lines.len(), 1 + 14 + 5);
    assert!(lines[1].starts_with("GADGET,2024-04-01,30.0,"));
    assert!(lines[1].ends_with(",,,"));
    assert!(lines[7].split(',').all(|field| !field.is_empty()));
    assert!(lines[19].starts_with("GADGET,2024-04-19,,"));
}

#[test]
fn test_summary_of_csv_plan() {
    let file = demand_file();
    let history = read_demand(
        File::open(file.path()).unwrap(),
        Some("WIDGET"),
        Frequency::Daily,
    )
    .unwrap();
    let plan = plan_item("WIDGET", history, &config()).unwrap();

    let start = NaiveDate::from_ymd_opt(2024, 4, 8).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
    let summary = ItemSummary::from_plan(&plan, start, end);

    assert_relative_eq!(summary.total_demand, 77.0);
    assert_relative_eq!(summary.average_daily_demand.unwrap(), 11.0);
    assert_eq!(
        summary.reorder_point,
        plan.latest_reorder().map(|r| r.reorder_point)
    );
}

#[test]
fn test_config_file_drives_plan() {
    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"{{"seasonal_periods": 7, "horizon": 3, "lead_time_days": 7, "service_level": 0.97}}"#
    )
    .unwrap();
    let config = PlannerConfig::from_json_file(config_file.path()).unwrap();

    let file = demand_file();
    let history = read_demand(
        File::open(file.path()).unwrap(),
        Some("WIDGET"),
        Frequency::Daily,
    )
    .unwrap();

    assert!(matches!(
        plan_item("WIDGET", history, &config),
        Err(PlanError::Math(
            restock::restock_math::MathError::UnsupportedServiceLevel(_)
        ))
    ));
}

#[test]
fn test_mixed_file_without_item_is_rejected() {
    let file = demand_file();
    let result = read_demand(File::open(file.path()).unwrap(), None, Frequency::Daily);
    assert!(matches!(result, Err(PlanError::Input(_))));
}
