//! # Correction Math
//!
//! Pure calculations behind monetary correction tables.
//! This crate turns a monthly rate series into a cumulative index table,
//! extends a series into the future with a supplied predictor, and applies
//! the resulting index to a principal amount.
//!
//! Nothing here performs I/O: historical data, predictors and persistence are
//! provided by the caller.

use thiserror::Error;

pub mod accumulate;
pub mod correct;
pub mod extend;
pub mod kind;
pub mod period;
pub mod series;
pub mod validation;

pub use crate::accumulate::{accumulate, CumulativeIndexTable};
pub use crate::correct::{correct_value, Correction};
pub use crate::extend::{extend_series, forecast_table, predict_checked, Extension, Predictor};
pub use crate::kind::CorrectionTableKind;
pub use crate::period::Period;
pub use crate::series::{RateObservation, Series};

/// Errors that can occur while building or reading correction tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrectionError {
    #[error("Prediction failed for {period}: {reason}")]
    PredictionFailure { period: Period, reason: String },

    #[error("Reference period {0} is not covered by the correction table")]
    ReferenceNotFound(Period),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate period in series: {0}")]
    DuplicatePeriod(Period),

    #[error("Invalid period: year={year}, month={month}")]
    InvalidPeriod { year: i32, month: u32 },
}

/// Result type for correction calculations
pub type Result<T> = std::result::Result<T, CorrectionError>;
