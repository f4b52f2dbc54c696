//! Calendar date ranges for policy periods
//!
//! Policy periods are whole calendar days. Both bounds are inclusive: a loss
//! on the first or the last day of the period falls inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a date lies relative to a [`DateRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePosition {
    BeforeStart,
    Within,
    AfterEnd,
}

/// Represents a date range for policy periods
///
/// The range is not checked for `start <= end`; an inverted range simply
/// contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Locates `date` against the range, checking the start bound first
    pub fn position(&self, date: NaiveDate) -> DatePosition {
        if date < self.start {
            DatePosition::BeforeStart
        } else if date > self.end {
            DatePosition::AfterEnd
        } else {
            DatePosition::Within
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date) == DatePosition::Within
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2025, 1, 1));

        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2025, 1, 1)));
        assert!(!range.contains(date(2023, 12, 31)));
        assert!(!range.contains(date(2025, 1, 2)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(date(2025, 1, 1), date(2024, 1, 1));

        assert_eq!(range.position(date(2024, 6, 1)), DatePosition::BeforeStart);
        assert!(!range.contains(date(2024, 6, 1)));
    }
}
