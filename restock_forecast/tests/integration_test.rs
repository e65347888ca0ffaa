use chrono::{Datelike, NaiveDate};
use pretty_assertions::assert_eq;
use restock_forecast::{evaluate, fit_and_forecast, metrics::evaluate_fit, ForecastError};
use restock_math::{Frequency, MathError, TimeSeries};

fn monthly_demand(n: usize) -> TimeSeries {
    let pattern = [
        -20.0, -15.0, -5.0, 0.0, 10.0, 25.0, 30.0, 20.0, 5.0, -5.0, -20.0, -25.0,
    ];
    let values = (0..n)
        .map(|t| 200.0 + 1.5 * t as f64 + pattern[t % 12] + if t % 2 == 0 { 3.0 } else { -3.0 })
        .collect();
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    TimeSeries::from_values(start, Frequency::Monthly, values).unwrap()
}

#[test]
fn test_two_years_monthly_six_month_horizon() {
    let series = monthly_demand(24);
    let result = fit_and_forecast(&series, 12, 6).unwrap();

    assert_eq!(result.fitted_values().len(), 24);
    assert_eq!(result.horizon(), 6);

    let months: Vec<(i32, u32)> = result
        .future_dates()
        .iter()
        .map(|d| (d.year(), d.month()))
        .collect();
    assert_eq!(
        months,
        vec![(2024, 1), (2024, 2), (2024, 3), (2024, 4), (2024, 5), (2024, 6)]
    );
}

#[test]
fn test_short_history_is_rejected() {
    let series = monthly_demand(20);
    let err = fit_and_forecast(&series, 12, 6).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::InsufficientData {
            required: 24,
            actual: 20
        }
    ));
}

#[test]
fn test_zero_horizon_is_rejected() {
    let series = monthly_demand(24);
    assert!(matches!(
        fit_and_forecast(&series, 12, 0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_forecast_then_score_fit() {
    let series = monthly_demand(36);
    let result = fit_and_forecast(&series, 12, 12).unwrap();

    let by_date = evaluate_fit(&series, &result).unwrap();
    let by_values = evaluate(series.values(), result.fitted_values()).unwrap();
    assert_eq!(by_date, by_values);
    assert!(by_date.mae <= by_date.rmse);
    assert!(by_date.mape.is_finite());
}

#[test]
fn test_forecast_feeds_reorder_input() {
    let series = monthly_demand(24);
    let result = fit_and_forecast(&series, 12, 3).unwrap();

    let demand = result.extend_demand(&series).unwrap();
    assert_eq!(demand.len(), 27);
    assert_eq!(&demand.values()[24..], result.future_values());

    let rows = result.to_rows(&series).unwrap();
    assert_eq!(rows.len(), 27);
    assert!(rows[..24].iter().all(|r| r.demand.is_some()));
    assert!(rows[24..].iter().all(|r| r.demand.is_none()));
}

#[test]
fn test_invalid_series_never_reaches_the_model() {
    let d = |m| NaiveDate::from_ymd_opt(2022, m, 1).unwrap();
    let err = TimeSeries::with_frequency(vec![(d(1), 1.0), (d(3), 2.0)], Frequency::Monthly)
        .unwrap_err();
    assert!(matches!(err, MathError::InvalidSeries(_)));
}
