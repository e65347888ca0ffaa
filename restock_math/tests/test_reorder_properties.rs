use chrono::NaiveDate;
use proptest::prelude::*;
use restock_math::reorder::compute;
use restock_math::{Frequency, MathError, TimeSeries};

fn daily(values: Vec<f64>) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    TimeSeries::from_values(start, Frequency::Daily, values).unwrap()
}

proptest! {
    #[test]
    fn output_length_drops_leading_window(
        values in prop::collection::vec(0.0f64..500.0, 0..60),
        lead_time in 2usize..15,
    ) {
        let series = daily(values);
        let records = compute(&series, lead_time, 0.95).unwrap();
        let expected = (series.len() + 1).saturating_sub(lead_time);
        prop_assert_eq!(records.len(), expected);
    }

    #[test]
    fn safety_stock_grows_with_service_level(
        values in prop::collection::vec(0.0f64..500.0, 10..40),
        lead_time in 2usize..10,
    ) {
        let series = daily(values);
        let low = compute(&series, lead_time, 0.90).unwrap();
        let mid = compute(&series, lead_time, 0.95).unwrap();
        let high = compute(&series, lead_time, 0.99).unwrap();

        for ((l, m), h) in low.iter().zip(mid.iter()).zip(high.iter()) {
            prop_assert!(l.safety_stock <= m.safety_stock);
            prop_assert!(m.safety_stock <= h.safety_stock);
            prop_assert!(l.reorder_point <= h.reorder_point);
        }
    }

    #[test]
    fn records_are_in_date_order(
        values in prop::collection::vec(0.0f64..100.0, 5..40),
    ) {
        let series = daily(values);
        let records = compute(&series, 3, 0.90).unwrap();
        prop_assert!(records.windows(2).all(|w| w[0].date < w[1].date));
        prop_assert_eq!(records.last().map(|r| r.date), series.last_date());
    }
}

#[test]
fn repeated_calls_are_identical() {
    let series = daily(vec![12.0, 15.0, 9.0, 20.0, 11.0, 14.0, 18.0, 7.0, 13.0]);
    let first = compute(&series, 4, 0.99).unwrap();
    let second = compute(&series, 4, 0.99).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unsupported_service_level_is_reported() {
    let series = daily(vec![1.0; 10]);
    let err = compute(&series, 7, 0.97).unwrap_err();
    assert_eq!(err, MathError::UnsupportedServiceLevel(0.97));
}

#[test]
fn gapped_input_never_reaches_the_calculator() {
    let d = |day| NaiveDate::from_ymd_opt(2023, 6, day).unwrap();
    let result = TimeSeries::new(vec![(d(1), 3.0), (d(2), 4.0), (d(4), 5.0)]);
    assert!(matches!(result, Err(MathError::InvalidSeries(_))));
}
