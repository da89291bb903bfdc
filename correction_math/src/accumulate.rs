//! Cumulative index accumulation
//!
//! The most recent month is the baseline (index 1). Walking backwards in time,
//! each older month compounds its own rate on top of the index of the month
//! after it:
//!
//! ```text
//! index[0] = 1
//! index[i] = index[i-1] + index[i-1] * rate[i] / 100
//! ```
//!
//! where position 0 is the most recent period. The index of a month is
//! therefore the factor that brings an amount from that month up to the
//! baseline month.

use crate::period::Period;
use crate::series::{RateObservation, Series};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cumulative index per period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeIndexTable {
    entries: BTreeMap<Period, f64>,
}

impl CumulativeIndexTable {
    /// Index for `period`, if the table covers it
    pub fn get(&self, period: Period) -> Option<f64> {
        self.entries.get(&period).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered oldest first
    pub fn iter(&self) -> impl Iterator<Item = (Period, f64)> + '_ {
        self.entries.iter().map(|(p, v)| (*p, *v))
    }

    pub fn first_period(&self) -> Option<Period> {
        self.entries.keys().next().copied()
    }

    pub fn last_period(&self) -> Option<Period> {
        self.entries.keys().next_back().copied()
    }

    /// Pivot into one row per year with a cell per month (January first).
    ///
    /// Months missing from the table are `None`. Rows are ordered by year.
    pub fn yearly_rows(&self) -> Vec<(i32, [Option<f64>; 12])> {
        let mut rows: BTreeMap<i32, [Option<f64>; 12]> = BTreeMap::new();
        for (period, value) in self.iter() {
            let row = rows.entry(period.year()).or_insert([None; 12]);
            row[(period.month() - 1) as usize] = Some(value);
        }
        rows.into_iter().collect()
    }
}

impl FromIterator<(Period, f64)> for CumulativeIndexTable {
    fn from_iter<I: IntoIterator<Item = (Period, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Accumulate a rate series into a cumulative index table.
///
/// The series is sorted most recent first before folding, regardless of the
/// order it was built in. An empty series yields an empty table and a single
/// observation always gets index 1.
pub fn accumulate(series: &Series) -> CumulativeIndexTable {
    accumulate_ordered(&series.descending())
}

fn accumulate_ordered(ordered: &[RateObservation]) -> CumulativeIndexTable {
    ordered
        .iter()
        .scan(None, |previous: &mut Option<f64>, obs| {
            let index = match *previous {
                None => 1.0,
                Some(prev) => prev + prev * obs.rate / 100.0,
            };
            *previous = Some(index);
            Some((obs.period, index))
        })
        .collect()
}
