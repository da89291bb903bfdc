//! Calendar months used as series keys

use crate::{CorrectionError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, ordered by year then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    year: i32,
    month: u32,
}

/// Unvalidated wire form of [`Period`]
#[derive(Deserialize)]
struct RawPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawPeriod> for Period {
    type Error = CorrectionError;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Period::new(raw.year, raw.month)
    }
}

impl Period {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CorrectionError::InvalidPeriod { year, month });
        }
        Ok(Self { year, month })
    }

    /// Caller guarantees `month` is in 1..=12
    pub(crate) const fn new_unchecked(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month, `None` for years chrono cannot represent
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The following calendar month, `None` past the last representable year
    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            self.year.checked_add(1).map(|year| Self { year, month: 1 })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// Number of months since year 0, used as a linear time axis
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// Number of months from `self` to `later`, negative when `later` precedes it
    pub fn months_until(&self, later: Period) -> i64 {
        later.ordinal() - self.ordinal()
    }

    /// Every month strictly after `last` up to and including `target`, ascending.
    ///
    /// Returns an empty vector when `target <= last`.
    pub fn months_after(last: Period, target: Period) -> Result<Vec<Period>> {
        let mut months = Vec::new();
        let mut current = last;
        while current < target {
            current = current.next().ok_or_else(|| {
                CorrectionError::InvalidInput(format!("No calendar month after {}", current))
            })?;
            months.push(current);
        }
        Ok(months)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
