//! Loading rate history from the central bank (BCB SGS) JSON payload

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use correction_math::{Period, RateObservation, Series};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Date format used by the SGS API (`dd/mm/yyyy`)
pub const BCB_DATE_FORMAT: &str = "%d/%m/%Y";

/// One raw row of the SGS payload.
///
/// `valor` is kept loosely typed: the API sends numeric strings, but rows with
/// blanks, nulls or garbage do show up and are dropped during cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcbRecord {
    pub data: String,
    #[serde(default)]
    pub valor: Value,
}

impl BcbRecord {
    pub fn new(data: impl Into<String>, valor: impl Into<Value>) -> Self {
        Self {
            data: data.into(),
            valor: valor.into(),
        }
    }

    /// Parsed date of the row
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(self.data.trim(), BCB_DATE_FORMAT).map_err(|e| {
            ForecastError::DataError(format!("Invalid date '{}': {}", self.data, e))
        })
    }

    /// Numeric rate, or `None` when the value is missing or not a number
    pub fn rate(&self) -> Option<f64> {
        let rate = match &self.valor {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        rate.filter(|r| r.is_finite())
    }
}

/// Data loader for rate history
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Parse and clean an SGS JSON payload
    pub fn from_bcb_json(payload: &str) -> Result<Series> {
        let records: Vec<BcbRecord> = serde_json::from_str(payload)?;
        Self::from_records(records)
    }

    /// Parse and clean an SGS JSON payload given as bytes
    pub fn from_bcb_slice(payload: &[u8]) -> Result<Series> {
        let records: Vec<BcbRecord> = serde_json::from_slice(payload)?;
        Self::from_records(records)
    }

    /// Clean raw records into a series.
    ///
    /// Rows without a numeric rate are discarded. Unparsable dates and two
    /// rows in the same month are errors.
    pub fn from_records(records: Vec<BcbRecord>) -> Result<Series> {
        let mut observations = Vec::with_capacity(records.len());

        for record in &records {
            let date = record.date()?;
            let Some(rate) = record.rate() else {
                continue;
            };
            observations.push(RateObservation::new(Period::from_date(date), rate));
        }

        let dropped = records.len() - observations.len();
        if dropped > 0 {
            tracing::debug!(dropped, "discarded rows without a numeric rate");
        }

        Series::new(observations).map_err(|e| ForecastError::DataError(e.to_string()))
    }
}
