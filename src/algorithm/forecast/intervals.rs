//! Interval grids and age groups for forecast series

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{PredictionError, Result};

/// Ranges spanning at least this many days are split by calendar month
pub const MONTHLY_THRESHOLD_DAYS: i64 = 31 * 2 + 1;

/// Upper age bound of an open-ended group such as `"65+"`
pub const MAX_AGE: u32 = 150;

/// Lengths in days of the intervals covering `start..=end`
///
/// Ranges of at least [`MONTHLY_THRESHOLD_DAYS`] days yield the length of
/// `start`'s month followed by one entry per further whole month in the range.
/// Shorter ranges yield `days + 1` one-day intervals. An inverted range is
/// empty.
#[must_use]
pub fn interval_lengths(start: NaiveDate, end: NaiveDate) -> Vec<i64> {
    let days = (end - start).num_days();

    if days >= MONTHLY_THRESHOLD_DAYS {
        let first_of_month = start.with_day(1).unwrap_or(start);
        (0..=whole_months_between(start, end))
            .filter_map(|offset| first_of_month.checked_add_months(Months::new(offset)))
            .map(month_length)
            .collect()
    } else {
        (0..days + 1).map(|_| 1).collect()
    }
}

/// `start` followed by the end date of each interval from [`interval_lengths`]
#[must_use]
pub fn interval_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = vec![start];
    let mut current = start;
    for length in interval_lengths(start, end) {
        current += chrono::Duration::days(length);
        dates.push(current);
    }
    dates
}

/// Round to two decimal places
#[must_use]
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Complete calendar months from `start` to `end`
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    u32::try_from(months).unwrap_or(0)
}

fn month_length(first_of_month: NaiveDate) -> i64 {
    first_of_month
        .checked_add_months(Months::new(1))
        .map_or(31, |next| (next - first_of_month).num_days())
}

/// Inclusive patient age range, written `"18-30"` or `"65+"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeGroup {
    min: u32,
    max: u32,
}

impl AgeGroup {
    /// Group covering `min..=max` years
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(PredictionError::InvalidAgeGroup(format!("{min}-{max}")));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Whether an age in years falls within the group
    #[must_use]
    pub const fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }
}

impl FromStr for AgeGroup {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || PredictionError::InvalidAgeGroup(s.to_string());
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());

        if let Some(min) = s.strip_suffix('+') {
            return Self::new(parse(min)?, MAX_AGE);
        }

        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        Self::new(parse(min)?, parse(max)?)
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == MAX_AGE {
            write!(f, "{}+", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}
