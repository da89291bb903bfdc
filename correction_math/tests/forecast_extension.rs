use approx::assert_relative_eq;
use correction_math::{
    accumulate, correct_value, extend_series, forecast_table, predict_checked, CorrectionError,
    Period, RateObservation, Series,
};
use std::cell::RefCell;

type Prediction = correction_math::Result<f64>;

fn constant(rate: f64) -> impl Fn(Period) -> Prediction {
    move |_| Ok(rate)
}

fn obs(year: i32, month: u32, rate: f64) -> RateObservation {
    RateObservation::new(Period::new(year, month).unwrap(), rate)
}

fn period(year: i32, month: u32) -> Period {
    Period::new(year, month).unwrap()
}

fn history() -> Series {
    Series::new(vec![
        obs(2023, 10, 1.0),
        obs(2023, 11, 0.9),
        obs(2023, 12, 0.8),
    ])
    .unwrap()
}

#[test]
fn test_target_not_after_history_adds_nothing() {
    let history = history();
    let predictor = |_: Period| -> Prediction { panic!("should not be called") };

    for target in [period(2023, 12), period(2023, 11), period(2020, 1)] {
        let extension = extend_series(&history, &predictor, target).unwrap();
        assert!(extension.synthetic.is_empty());

        let table = forecast_table(&history, &predictor, target).unwrap();
        assert_eq!(table, accumulate(&history));
    }
}

#[test]
fn test_appends_one_observation_per_missing_month() {
    let history = history();
    let calls = RefCell::new(Vec::new());
    let predictor = |p: Period| -> Prediction {
        calls.borrow_mut().push(p);
        Ok(0.5)
    };

    let extension = extend_series(&history, &predictor, period(2024, 4)).unwrap();

    let expected = vec![
        period(2024, 1),
        period(2024, 2),
        period(2024, 3),
        period(2024, 4),
    ];
    let synthetic: Vec<Period> = extension.synthetic.iter().map(|o| o.period).collect();
    assert_eq!(synthetic, expected);
    assert_eq!(*calls.borrow(), expected);
    assert_eq!(extension.series.len(), history.len() + 4);
}

#[test]
fn test_extended_table_uses_target_as_baseline() {
    let history = history();
    let predictor = constant(1.0);

    let table = forecast_table(&history, &predictor, period(2024, 2)).unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(table.get(period(2024, 2)), Some(1.0));
    assert_relative_eq!(table.get(period(2024, 1)).unwrap(), 1.01);
    assert_relative_eq!(table.get(period(2023, 12)).unwrap(), 1.01 * 1.008);
}

#[test]
fn test_predictor_failure_aborts() {
    let history = history();
    let predictor = |p: Period| -> Prediction {
        if p == period(2024, 2) {
            Err(CorrectionError::InvalidInput("model exploded".to_string()))
        } else {
            Ok(0.5)
        }
    };

    let result = forecast_table(&history, &predictor, period(2024, 3));
    match result {
        Err(CorrectionError::PredictionFailure { period: p, reason }) => {
            assert_eq!(p, period(2024, 2));
            assert!(reason.contains("model exploded"));
        }
        other => panic!("Expected PredictionFailure, got {:?}", other),
    }
}

#[test]
fn test_non_finite_prediction_is_a_failure() {
    let predictor = constant(f64::NAN);
    let result = extend_series(&history(), &predictor, period(2024, 1));
    assert!(matches!(
        result,
        Err(CorrectionError::PredictionFailure { .. })
    ));
}

#[test]
fn test_empty_history_has_no_anchor() {
    let predictor = constant(1.0);
    let table = forecast_table(&Series::default(), &predictor, period(2030, 1)).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_scenario_zero_rates() {
    let history = Series::new(vec![obs(2024, 1, 0.0), obs(2024, 2, 0.0)]).unwrap();
    let predictor = constant(0.0);

    let table = forecast_table(&history, &predictor, period(2024, 2)).unwrap();
    assert_eq!(table.get(period(2024, 1)), Some(1.0));
    assert_eq!(table.get(period(2024, 2)), Some(1.0));

    let correction = correct_value(100.0, period(2024, 2), &table).unwrap();
    assert_eq!(correction.valor_previsto, 100.0);
}

#[test]
fn test_scenario_single_point_baseline() {
    let history = Series::new(vec![obs(2024, 1, 10.0)]).unwrap();
    let predictor = constant(0.0);

    let table = forecast_table(&history, &predictor, period(2024, 1)).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(period(2024, 1)), Some(1.0));

    let correction = correct_value(50.0, period(2024, 1), &table).unwrap();
    assert_eq!(correction.valor_previsto, 50.0);
}

#[test]
fn test_scenario_one_step_back() {
    let history = Series::new(vec![obs(2024, 1, 0.0), obs(2024, 2, 10.0)]).unwrap();
    let predictor = constant(0.0);

    let table = forecast_table(&history, &predictor, period(2024, 2)).unwrap();
    assert_eq!(table.get(period(2024, 2)), Some(1.0));
    assert_relative_eq!(table.get(period(2024, 1)).unwrap(), 1.10);

    let correction = correct_value(100.0, period(2024, 1), &table).unwrap();
    assert_relative_eq!(correction.taxa, 1.10);
    assert_relative_eq!(correction.valor_previsto, 110.0);
}

#[test]
fn test_extension_up_to_last_calendar_month() {
    let history = Series::new(vec![obs(i32::MAX, 11, 0.5)]).unwrap();
    let predictor = constant(1.0);

    let table = forecast_table(&history, &predictor, period(i32::MAX, 12)).unwrap();
    assert_eq!(table.get(period(i32::MAX, 12)), Some(1.0));
    assert_relative_eq!(table.get(period(i32::MAX, 11)).unwrap(), 1.005);
}

#[test]
fn test_oversized_gap_is_rejected_before_predicting() {
    let predictor = |_: Period| -> Prediction { panic!("should not be called") };

    for target in [period(2_000_000, 1), period(i32::MAX, 12)] {
        let result = forecast_table(&history(), &predictor, target);
        assert!(matches!(result, Err(CorrectionError::InvalidInput(_))));
    }
}

#[test]
fn test_checked_prediction() {
    let target = period(2024, 1);

    assert_eq!(predict_checked(&constant(0.4), target), Ok(0.4));
    for rate in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert!(matches!(
            predict_checked(&constant(rate), target),
            Err(CorrectionError::PredictionFailure { period: p, .. }) if p == target
        ));
    }
}
