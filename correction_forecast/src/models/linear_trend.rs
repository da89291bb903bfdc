//! Ordinary least squares trend over the month index

use super::{ForecastModel, TrainedForecastModel};
use crate::error::{ForecastError, Result};
use correction_math::{Period, RateObservation};
use serde::{Deserialize, Serialize};

/// Linear trend configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrend;

/// Fitted linear trend: `rate = slope * ordinal + intercept`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedLinearTrend {
    name: String,
    slope: f64,
    intercept: f64,
}

impl TrainedLinearTrend {
    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl ForecastModel for LinearTrend {
    type Trained = TrainedLinearTrend;

    fn train(&self, samples: &[RateObservation]) -> Result<Self::Trained> {
        if samples.len() < 2 {
            return Err(ForecastError::ValidationError(
                "Not enough data for a linear trend. Need at least 2 points.".to_string(),
            ));
        }

        let n = samples.len() as f64;
        let x_mean = samples.iter().map(|o| o.period.ordinal() as f64).sum::<f64>() / n;
        let y_mean = samples.iter().map(|o| o.rate).sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for obs in samples {
            let dx = obs.period.ordinal() as f64 - x_mean;
            numerator += dx * (obs.rate - y_mean);
            denominator += dx * dx;
        }

        if denominator.abs() < 1e-10 {
            return Err(ForecastError::ModelError(
                "Cannot calculate slope: all observations fall in the same month".to_string(),
            ));
        }

        let slope = numerator / denominator;
        Ok(TrainedLinearTrend {
            name: self.name().to_string(),
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    fn name(&self) -> &str {
        "Linear Trend"
    }
}

impl TrainedForecastModel for TrainedLinearTrend {
    fn predict_rate(&self, period: Period) -> Result<f64> {
        Ok(self.slope * period.ordinal() as f64 + self.intercept)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
