//! Regression models predicting the rate of a calendar month

use crate::error::{ForecastError, Result};
use correction_math::{CorrectionError, Period, Predictor, RateObservation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod decision_tree;
pub mod linear_trend;

pub use decision_tree::{DecisionTreeRegressor, TrainedDecisionTree};
pub use linear_trend::{LinearTrend, TrainedLinearTrend};

/// Feature vector of a month: `[year, month]`
pub fn features(period: Period) -> [f64; 2] {
    [period.year() as f64, period.month() as f64]
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Predicted rate for `period`
    fn predict_rate(&self, period: Period) -> Result<f64>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on rate observations
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on the given observations
    fn train(&self, samples: &[RateObservation]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Regression family used for a correction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    DecisionTree,
    LinearTrend,
}

impl ModelFamily {
    /// Train a model of this family with default parameters
    pub fn train(&self, samples: &[RateObservation]) -> Result<ModelArtifact> {
        match self {
            ModelFamily::DecisionTree => DecisionTreeRegressor::default()
                .train(samples)
                .map(ModelArtifact::DecisionTree),
            ModelFamily::LinearTrend => LinearTrend.train(samples).map(ModelArtifact::LinearTrend),
        }
    }
}

/// A trained model in its persisted form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", content = "model", rename_all = "snake_case")]
pub enum ModelArtifact {
    DecisionTree(TrainedDecisionTree),
    LinearTrend(TrainedLinearTrend),
}

impl ModelArtifact {
    pub fn family(&self) -> ModelFamily {
        match self {
            ModelArtifact::DecisionTree(_) => ModelFamily::DecisionTree,
            ModelArtifact::LinearTrend(_) => ModelFamily::LinearTrend,
        }
    }

    /// Serialize for storage or download
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize a stored or uploaded artifact
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| ForecastError::ModelError(format!("Invalid model artifact: {}", e)))
    }
}

impl TrainedForecastModel for ModelArtifact {
    fn predict_rate(&self, period: Period) -> Result<f64> {
        match self {
            ModelArtifact::DecisionTree(model) => model.predict_rate(period),
            ModelArtifact::LinearTrend(model) => model.predict_rate(period),
        }
    }

    fn name(&self) -> &str {
        match self {
            ModelArtifact::DecisionTree(model) => model.name(),
            ModelArtifact::LinearTrend(model) => model.name(),
        }
    }
}

impl Predictor for ModelArtifact {
    fn predict(&self, period: Period) -> correction_math::Result<f64> {
        self.predict_rate(period)
            .map_err(|e| CorrectionError::PredictionFailure {
                period,
                reason: e.to_string(),
            })
    }
}
