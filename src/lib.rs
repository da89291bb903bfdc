//! # Monetary Correction
//!
//! Facade over the workspace libraries:
//!
//! - [`math`]: periods, rate series, cumulative tables and value correction
//! - [`forecast`]: rate loading, regression models, model storage and CSV export
//!
//! ## Example
//!
//! ```
//! use monetary_correction::math::{accumulate, correct_value, Period, RateObservation, Series};
//!
//! let history = Series::new(vec![
//!     RateObservation::new(Period::new(2024, 1)?, 1.0),
//!     RateObservation::new(Period::new(2024, 2)?, 0.5),
//! ])?;
//! let table = accumulate(&history);
//!
//! let correction = correct_value(100.0, Period::new(2024, 1)?, &table)?;
//! assert!((correction.taxa - 1.01).abs() < 1e-12);
//! # Ok::<(), monetary_correction::math::CorrectionError>(())
//! ```

pub use correction_forecast as forecast;
pub use correction_math as math;
