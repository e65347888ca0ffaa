use approx::assert_relative_eq;
use proptest::prelude::*;
use restock_forecast::metrics::{
    evaluate, mean_absolute_error, mean_absolute_percentage_error, root_mean_squared_error,
};
use restock_forecast::ForecastError;

#[test]
fn test_regression_metrics() {
    let actual = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let predicted = vec![12.0, 18.0, 33.0, 37.0, 52.0];

    let mae = mean_absolute_error(&actual, &predicted).unwrap();
    assert_relative_eq!(mae, 2.4);

    let rmse = root_mean_squared_error(&actual, &predicted).unwrap();
    assert_relative_eq!(rmse, 6.0_f64.sqrt());

    // 20% + 10% + 10% + 7.5% + 4% over five values
    let mape = mean_absolute_percentage_error(&actual, &predicted).unwrap();
    assert_relative_eq!(mape, 10.3, max_relative = 1e-12);
}

#[test]
fn test_mape_over_nonzero_actuals_only() {
    let metrics = evaluate(&[0.0, 0.0, 5.0], &[1.0, 1.0, 4.0]).unwrap();
    assert_relative_eq!(metrics.mape, 20.0);
    assert_relative_eq!(metrics.mae, 1.0);
    assert_relative_eq!(metrics.rmse, 1.0);
}

#[test]
fn test_all_zero_actuals_make_mape_undefined() {
    let err = evaluate(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, ForecastError::UndefinedMetric(_)));

    // MAE and RMSE remain available on their own
    assert_relative_eq!(mean_absolute_error(&[0.0, 0.0], &[1.0, 2.0]).unwrap(), 1.5);
}

#[test]
fn test_length_mismatch() {
    let err = evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::LengthMismatch {
            actual: 3,
            predicted: 2
        }
    ));
}

#[test]
fn test_perfect_prediction_scores_zero() {
    let values = [3.0, 7.0, 0.0, 12.0];
    let metrics = evaluate(&values, &values).unwrap();
    assert_eq!(metrics.mae, 0.0);
    assert_eq!(metrics.rmse, 0.0);
    assert_eq!(metrics.mape, 0.0);
}

proptest! {
    #[test]
    fn mae_never_exceeds_rmse(
        pairs in prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 1..50),
    ) {
        let (actual, predicted): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let mae = mean_absolute_error(&actual, &predicted).unwrap();
        let rmse = root_mean_squared_error(&actual, &predicted).unwrap();
        prop_assert!(mae <= rmse + 1e-9 * (1.0 + rmse));
        prop_assert!(mae >= 0.0);
    }

    #[test]
    fn errors_vanish_only_for_identical_inputs(
        actual in prop::collection::vec(1.0f64..100.0, 1..30),
        index in 0usize..30,
        bump in 0.5f64..10.0,
    ) {
        let mut predicted = actual.clone();
        let metrics = evaluate(&actual, &predicted).unwrap();
        prop_assert_eq!(metrics.mae, 0.0);
        prop_assert_eq!(metrics.rmse, 0.0);

        let i = index % predicted.len();
        predicted[i] += bump;
        let metrics = evaluate(&actual, &predicted).unwrap();
        prop_assert!(metrics.mae > 0.0);
        prop_assert!(metrics.rmse > 0.0);
    }
}
