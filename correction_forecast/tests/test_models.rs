use approx::assert_relative_eq;
use correction_forecast::models::{
    DecisionTreeRegressor, ForecastModel, LinearTrend, ModelArtifact, ModelFamily,
    TrainedForecastModel,
};
use correction_math::{forecast_table, CorrectionError, Period, Predictor, RateObservation};

fn monthly(start_year: i32, rates: &[f64]) -> Vec<RateObservation> {
    let mut period = Period::new(start_year, 1).unwrap();
    rates
        .iter()
        .map(|&rate| {
            let obs = RateObservation::new(period, rate);
            period = period.next().unwrap();
            obs
        })
        .collect()
}

#[test]
fn test_unconstrained_tree_fits_training_points() {
    let samples = monthly(2022, &[0.7, 0.8, 1.1, 0.9, 1.0, 1.2, 0.6, 0.95, 1.05, 0.85, 0.75, 1.15, 0.5]);
    let tree = DecisionTreeRegressor::default().train(&samples).unwrap();

    for obs in &samples {
        assert_relative_eq!(tree.predict_rate(obs.period).unwrap(), obs.rate);
    }
    assert_eq!(tree.leaves(), samples.len());
}

#[test]
fn test_depth_limit() {
    let samples = monthly(2020, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let tree = DecisionTreeRegressor::new(Some(1), 2)
        .unwrap()
        .train(&samples)
        .unwrap();

    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.leaves(), 2);
}

#[test]
fn test_tree_predicts_future_from_nearest_leaf() {
    let samples = monthly(2023, &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
    let tree = DecisionTreeRegressor::default().train(&samples).unwrap();

    let future = Period::new(2030, 12).unwrap();
    let rate = tree.predict_rate(future).unwrap();
    assert!(rate == 1.0 || rate == 2.0);
}

#[test]
fn test_linear_trend_recovers_line() {
    let rates: Vec<f64> = (0..24).map(|i| 0.5 + 0.01 * i as f64).collect();
    let samples = monthly(2020, &rates);
    let trend = LinearTrend.train(&samples).unwrap();

    assert_relative_eq!(trend.slope(), 0.01, epsilon = 1e-9);
    let next = Period::new(2022, 1).unwrap();
    assert_relative_eq!(trend.predict_rate(next).unwrap(), 0.74, epsilon = 1e-9);
}

#[test]
fn test_model_parameter_validation() {
    assert!(DecisionTreeRegressor::new(Some(0), 2).is_err());
    assert!(DecisionTreeRegressor::new(None, 1).is_err());
    assert!(DecisionTreeRegressor::default().train(&[]).is_err());
    assert!(LinearTrend.train(&monthly(2020, &[1.0])).is_err());
}

#[test]
fn test_artifact_round_trips_through_bytes() {
    let samples = monthly(2021, &[0.4, 0.6, 0.5, 0.7]);
    for family in [ModelFamily::DecisionTree, ModelFamily::LinearTrend] {
        let artifact = family.train(&samples).unwrap();
        let restored = ModelArtifact::from_bytes(&artifact.to_bytes().unwrap()).unwrap();

        assert_eq!(restored, artifact);
        assert_eq!(restored.family(), family);
    }
}

#[test]
fn test_artifact_rejects_garbage() {
    assert!(ModelArtifact::from_bytes(b"not a model").is_err());
}

#[test]
fn test_artifact_drives_forecast_extension() {
    let samples = monthly(2024, &[1.0, 1.0, 1.0]);
    let history = correction_math::Series::new(samples.clone()).unwrap();
    let artifact = ModelFamily::DecisionTree.train(&samples).unwrap();

    let target = Period::new(2024, 5).unwrap();
    let table = forecast_table(&history, &artifact, target).unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(table.get(target), Some(1.0));
    assert_relative_eq!(table.get(Period::new(2024, 4).unwrap()).unwrap(), 1.01);
}

#[test]
fn test_artifact_as_predictor() {
    let samples = monthly(2024, &[2.0, 2.0]);
    let artifact = ModelFamily::LinearTrend.train(&samples).unwrap();
    let rate = Predictor::predict(&artifact, Period::new(2025, 1).unwrap()).unwrap();
    assert_relative_eq!(rate, 2.0, epsilon = 1e-9);

    let err: CorrectionError = CorrectionError::PredictionFailure {
        period: Period::new(2025, 1).unwrap(),
        reason: "x".to_string(),
    };
    assert!(err.to_string().contains("2025-01"));
}
