//! Forecast extension of a historical rate series

use crate::accumulate::{accumulate, CumulativeIndexTable};
use crate::period::Period;
use crate::series::{RateObservation, Series};
use crate::{CorrectionError, Result};

/// Something that can predict the rate of a given month
pub trait Predictor {
    /// Predicted rate (percentage) for `period`
    fn predict(&self, period: Period) -> Result<f64>;
}

impl<F> Predictor for F
where
    F: Fn(Period) -> Result<f64>,
{
    fn predict(&self, period: Period) -> Result<f64> {
        self(period)
    }
}

/// Longest gap between the last observation and the target that will be filled
pub const MAX_EXTENSION_MONTHS: i64 = 12 * 200;

/// Ask `predictor` for `period`, turning any error or non-finite value into a
/// [`CorrectionError::PredictionFailure`] for that month
pub fn predict_checked<P>(predictor: &P, period: Period) -> Result<f64>
where
    P: Predictor + ?Sized,
{
    let rate = predictor.predict(period).map_err(|err| match err {
        CorrectionError::PredictionFailure { .. } => err,
        other => CorrectionError::PredictionFailure {
            period,
            reason: other.to_string(),
        },
    })?;
    if !rate.is_finite() {
        return Err(CorrectionError::PredictionFailure {
            period,
            reason: format!("non-finite prediction {}", rate),
        });
    }
    Ok(rate)
}

/// A historical series extended with predicted months
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    /// Historical observations followed by the synthetic ones
    pub series: Series,
    /// Predicted observations, ascending by period
    pub synthetic: Vec<RateObservation>,
}

/// Extend `history` with one predicted observation per month after its last
/// period, up to and including `target`.
///
/// Fails on the first prediction error; no partial extension is returned.
/// An empty history has no anchor month and is returned unchanged. Gaps longer
/// than [`MAX_EXTENSION_MONTHS`] are rejected before any prediction is made.
pub fn extend_series<P>(history: &Series, predictor: &P, target: Period) -> Result<Extension>
where
    P: Predictor + ?Sized,
{
    let months = match history.last_period() {
        Some(last) => {
            let gap = last.months_until(target);
            if gap > MAX_EXTENSION_MONTHS {
                return Err(CorrectionError::InvalidInput(format!(
                    "Cannot extend {} months past {}, the limit is {}",
                    gap, last, MAX_EXTENSION_MONTHS
                )));
            }
            Period::months_after(last, target)?
        }
        None => Vec::new(),
    };

    let synthetic = months
        .into_iter()
        .map(|period| Ok(RateObservation::new(period, predict_checked(predictor, period)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut series = history.clone();
    series.append(synthetic.clone())?;

    Ok(Extension { series, synthetic })
}

/// Extend `history` up to `target` and accumulate the combined series
pub fn forecast_table<P>(
    history: &Series,
    predictor: &P,
    target: Period,
) -> Result<CumulativeIndexTable>
where
    P: Predictor + ?Sized,
{
    let extension = extend_series(history, predictor, target)?;
    Ok(accumulate(&extension.series))
}
