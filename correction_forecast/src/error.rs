//! Error types for the correction_forecast crate

use correction_math::CorrectionError;
use thiserror::Error;

/// Custom error types for the correction_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error raised while training or evaluating a model
    #[error("Model error: {0}")]
    ModelError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No persisted model exists for the requested table
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from (de)serializing payloads or model artifacts
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error from writing CSV output
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from the correction calculations
    #[error(transparent)]
    Correction(#[from] CorrectionError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}
