//! Input rules applied before a correction is computed

use crate::period::Period;
use crate::{CorrectionError, Result};

/// Furthest a prediction may reach past the current month
pub const MAX_FORECAST_HORIZON_MONTHS: i64 = 12 * 100;

/// Principal amounts must be strictly positive
pub fn ensure_positive_principal(principal: f64) -> Result<()> {
    if principal.is_nan() || principal <= 0.0 {
        return Err(CorrectionError::InvalidInput(
            "Não é permitido calcular um valor negativo ou igual a zero.".to_string(),
        ));
    }
    Ok(())
}

/// `reference` must not precede `minimum`
pub fn ensure_not_before(reference: Period, minimum: Period) -> Result<()> {
    if reference < minimum {
        return Err(CorrectionError::InvalidInput(format!(
            "Não é permitido calcular um valor que anteceda {}.",
            minimum
        )));
    }
    Ok(())
}

/// `target` must be strictly after `current`
pub fn ensure_future(target: Period, current: Period) -> Result<()> {
    if target <= current {
        return Err(CorrectionError::InvalidInput(
            "Não é permitido fazer uma predição com data no passado.".to_string(),
        ));
    }
    Ok(())
}

/// `target` must lie at most [`MAX_FORECAST_HORIZON_MONTHS`] after `current`
pub fn ensure_within_horizon(target: Period, current: Period) -> Result<()> {
    if current.months_until(target) > MAX_FORECAST_HORIZON_MONTHS {
        return Err(CorrectionError::InvalidInput(format!(
            "Não é permitido fazer uma predição com mais de {} meses de antecedência.",
            MAX_FORECAST_HORIZON_MONTHS
        )));
    }
    Ok(())
}
