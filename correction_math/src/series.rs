//! Monthly rate series

use crate::period::Period;
use crate::{CorrectionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single monthly rate, expressed as a percentage (1.5 means 1.5%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateObservation {
    pub period: Period,
    pub rate: f64,
}

impl RateObservation {
    pub fn new(period: Period, rate: f64) -> Self {
        Self { period, rate }
    }
}

/// A series of rate observations with unique periods.
///
/// The series keeps whatever order it was built with; consumers that need a
/// particular direction sort explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    observations: Vec<RateObservation>,
}

impl Series {
    /// Build a series, rejecting duplicate periods
    pub fn new(observations: Vec<RateObservation>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(observations.len());
        for obs in &observations {
            if !seen.insert(obs.period) {
                return Err(CorrectionError::DuplicatePeriod(obs.period));
            }
        }
        Ok(Self { observations })
    }

    /// Append observations that must not collide with existing periods
    pub fn append(&mut self, extra: Vec<RateObservation>) -> Result<()> {
        let mut seen: HashSet<Period> = self.observations.iter().map(|o| o.period).collect();
        for obs in &extra {
            if !seen.insert(obs.period) {
                return Err(CorrectionError::DuplicatePeriod(obs.period));
            }
        }
        self.observations.extend(extra);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[RateObservation] {
        &self.observations
    }

    pub fn iter(&self) -> impl Iterator<Item = &RateObservation> {
        self.observations.iter()
    }

    /// Most recent period in the series
    pub fn last_period(&self) -> Option<Period> {
        self.observations.iter().map(|o| o.period).max()
    }

    /// Oldest period in the series
    pub fn first_period(&self) -> Option<Period> {
        self.observations.iter().map(|o| o.period).min()
    }

    /// Observations ordered most recent first
    pub fn descending(&self) -> Vec<RateObservation> {
        let mut sorted = self.observations.clone();
        sorted.sort_by(|a, b| b.period.cmp(&a.period));
        sorted
    }

    /// Observations ordered oldest first
    pub fn ascending(&self) -> Vec<RateObservation> {
        let mut sorted = self.observations.clone();
        sorted.sort_by_key(|o| o.period);
        sorted
    }
}

impl IntoIterator for Series {
    type Item = RateObservation;
    type IntoIter = std::vec::IntoIter<RateObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.into_iter()
    }
}
