use chrono::NaiveDate;
use restock_forecast::metrics::evaluate_fit;
use restock_forecast::models::{ForecastModel, TrainedForecastModel};
use restock_forecast::HoltWinters;
use restock_math::{Frequency, TimeSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Restock Forecast: Basic Forecasting Example");
    println!("===========================================\n");

    let series = create_monthly_demand(36)?;
    println!(
        "Monthly demand: {} points from {} to {}\n",
        series.len(),
        series.first_date().unwrap_or_default(),
        series.last_date().unwrap_or_default()
    );

    // Fit a yearly cycle and let the optimiser pick the coefficients
    let model = HoltWinters::new(12)?;
    let trained = model.train(&series)?;

    let params = trained.params();
    println!(
        "Fitted coefficients: alpha={:.3} beta={:.3} gamma={:.3} (SSE {:.2})",
        params.alpha,
        params.beta,
        params.gamma,
        trained.sse()
    );
    if let Some(run) = trained.optimization() {
        println!(
            "Optimiser: {} iterations, converged: {}",
            run.iterations, run.converged
        );
    }

    let forecast = trained.forecast(6)?;
    println!("\nSix month forecast:");
    for (date, value) in forecast.future_forecast() {
        println!("  {}: {:.1}", date, value);
    }

    println!("\n{}", evaluate_fit(&series, &forecast)?);

    Ok(())
}

/// Demand with a gentle upward trend and a summer peak
fn create_monthly_demand(months: usize) -> Result<TimeSeries, restock_math::MathError> {
    let season = [
        -30.0, -25.0, -10.0, 0.0, 15.0, 35.0, 45.0, 30.0, 10.0, -5.0, -25.0, -40.0,
    ];
    let values = (0..months)
        .map(|t| 300.0 + 2.0 * t as f64 + season[t % 12] + ((t * 7) % 5) as f64)
        .collect();
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default();
    TimeSeries::from_values(start, Frequency::Monthly, values)
}
