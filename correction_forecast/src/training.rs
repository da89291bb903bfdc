//! Training a correction table model from its rate history

use crate::error::Result;
use crate::models::{ModelArtifact, ModelFamily, TrainedForecastModel};
use crate::utils::{forecast_accuracy, train_test_split, ForecastAccuracy};
use correction_math::Series;

/// Share of the history held out for evaluation
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

/// Seed of the train/test shuffle
pub const DEFAULT_SEED: u64 = 42;

/// Outcome of a training run
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub artifact: ModelArtifact,
    pub train_size: usize,
    pub test_size: usize,
    /// Accuracy on the held-out months, `None` when nothing was held out
    pub accuracy: Option<ForecastAccuracy>,
}

/// Train `family` on `history` with the default split
pub fn train_model(family: ModelFamily, history: &Series) -> Result<TrainingReport> {
    train_model_with(family, history, DEFAULT_TEST_RATIO, DEFAULT_SEED)
}

/// Train `family` on a seeded random split of `history`
pub fn train_model_with(
    family: ModelFamily,
    history: &Series,
    test_ratio: f64,
    seed: u64,
) -> Result<TrainingReport> {
    let (train, test) = train_test_split(history.observations(), test_ratio, seed);
    let artifact = family.train(&train)?;

    let accuracy = if test.is_empty() {
        None
    } else {
        let predicted = test
            .iter()
            .map(|obs| artifact.predict_rate(obs.period))
            .collect::<Result<Vec<f64>>>()?;
        let actual: Vec<f64> = test.iter().map(|obs| obs.rate).collect();
        Some(forecast_accuracy(&predicted, &actual)?)
    };

    tracing::info!(
        model = artifact.name(),
        train_size = train.len(),
        test_size = test.len(),
        mae = accuracy.map(|a| a.mae),
        rmse = accuracy.map(|a| a.rmse),
        "model trained"
    );

    Ok(TrainingReport {
        artifact,
        train_size: train.len(),
        test_size: test.len(),
        accuracy,
    })
}
