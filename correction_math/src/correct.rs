//! Applying a cumulative index to a principal amount

use crate::accumulate::CumulativeIndexTable;
use crate::period::Period;
use crate::{CorrectionError, Result};
use serde::{Deserialize, Serialize};

/// A corrected amount and the index used to produce it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub period: Period,
    /// Cumulative index at `period`
    pub taxa: f64,
    /// Principal multiplied by `taxa`
    pub valor_previsto: f64,
}

/// Correct `principal` using the table's index at `reference`.
///
/// Returns [`CorrectionError::ReferenceNotFound`] when the table does not
/// cover the reference month.
pub fn correct_value(
    principal: f64,
    reference: Period,
    table: &CumulativeIndexTable,
) -> Result<Correction> {
    let taxa = table
        .get(reference)
        .ok_or(CorrectionError::ReferenceNotFound(reference))?;

    Ok(Correction {
        period: reference,
        taxa,
        valor_previsto: principal * taxa,
    })
}
