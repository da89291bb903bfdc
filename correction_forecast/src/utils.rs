//! Utility functions for the correction_forecast crate

use crate::error::{ForecastError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use statrs::statistics::Statistics;

/// Shuffle `data` with a seeded RNG and hold out `test_ratio` of it.
///
/// The held-out size is rounded up. At least one sample always stays in the
/// training part, and inputs with fewer than two samples are returned whole
/// as training data.
pub fn train_test_split<T: Clone>(data: &[T], test_ratio: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    if data.len() < 2 || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return (data.to_vec(), Vec::new());
    }

    let mut indices: Vec<usize> = (0..data.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_size = ((data.len() as f64 * test_ratio).ceil() as usize).min(data.len() - 1);
    let (test_idx, train_idx) = indices.split_at(test_size);

    let train = train_idx.iter().map(|&i| data[i].clone()).collect();
    let test = test_idx.iter().map(|&i| data[i].clone()).collect();

    (train, test)
}

/// Accuracy metrics for a forecast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

/// Calculate accuracy metrics for a forecast vs actual values
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).mean();
    let mse = errors.iter().map(|e| e * e).mean();

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse: mse.sqrt(),
    })
}
