//! # Correction Forecast
//!
//! Everything between raw rate data and the pure calculations in
//! `correction_math`:
//!
//! - Loading and cleaning the central bank (BCB SGS) rate payload
//! - Regression models that predict a month's rate (decision tree, linear trend)
//! - Train/test splitting and accuracy metrics
//! - A file-backed model store keyed by correction table kind
//! - CSV export of cumulative correction tables
//!
//! ## Quick Start
//!
//! ```rust
//! use correction_forecast::data::DataLoader;
//! use correction_forecast::models::ModelFamily;
//! use correction_math::{forecast_table, Period};
//!
//! let payload = r#"[
//!     {"data": "01/01/2024", "valor": "0.97"},
//!     {"data": "01/02/2024", "valor": "0.80"},
//!     {"data": "01/03/2024", "valor": "0.83"}
//! ]"#;
//! let history = DataLoader::from_bcb_json(payload)?;
//!
//! let model = ModelFamily::LinearTrend.train(history.observations())?;
//! let target = Period::new(2024, 6)?;
//! let table = forecast_table(&history, &model, target)?;
//! assert_eq!(table.get(target), Some(1.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod data;
pub mod error;
pub mod models;
pub mod store;
pub mod table;
pub mod training;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{BcbRecord, DataLoader};
pub use crate::error::ForecastError;
pub use crate::models::{ForecastModel, ModelArtifact, ModelFamily, TrainedForecastModel};
pub use crate::store::FileModelStore;
pub use crate::training::{train_model, TrainingReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
