//! Historical day buckets behind the demand forecasts
//!
//! Buckets are laid out backwards from the anchor day. Bucket `i` covers
//! `[anchor - (i+1)*interval, anchor - i*interval)` and carries weight
//! `depth - i`, so the most recent bucket weighs `depth` and the oldest `1`.

use chrono::{Duration, NaiveDate};

use crate::error::{PredictionError, Result};

/// One fixed-width window of request history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandBucket {
    /// Position counted from the most recent bucket (0)
    pub index: usize,
    /// Width in days
    pub day_interval: i64,
    /// First day inside the bucket
    pub start: NaiveDate,
    /// First day after the bucket
    pub end: NaiveDate,
    /// Linear weight, `depth - index`
    pub weight: usize,
}

impl DemandBucket {
    /// Whether a calendar day falls inside the bucket
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }
}

/// `depth` disjoint buckets of `day_interval` days ending just before `anchor`
///
/// Returned most recent first. Fails with `InvalidInterval` when the interval
/// is not positive.
pub fn buckets(anchor: NaiveDate, day_interval: i64, depth: usize) -> Result<Vec<DemandBucket>> {
    if day_interval <= 0 {
        return Err(PredictionError::InvalidInterval(day_interval));
    }

    let width = Duration::try_days(day_interval)
        .ok_or(PredictionError::InvalidInterval(day_interval))?;

    let mut end = anchor;
    let mut result = Vec::new();
    for index in 0..depth {
        let Some(start) = end.checked_sub_signed(width) else {
            break;
        };
        result.push(DemandBucket {
            index,
            day_interval,
            start,
            end,
            weight: depth - index,
        });
        end = start;
    }
    Ok(result)
}

/// Sum of the weights `1..=depth`
#[must_use]
pub const fn weight_denominator(depth: usize) -> usize {
    depth * (depth + 1) / 2
}

/// Triangular weighted average of per-bucket counts, most recent first
///
/// `counts[i]` is weighted by `depth - i` and the sum is divided by
/// `1 + 2 + .. + depth`. Counts beyond `depth` are ignored.
#[must_use]
pub fn weighted_average(counts: &[usize], depth: usize) -> f64 {
    let denominator = weight_denominator(depth);
    if denominator == 0 {
        return 0.0;
    }

    let weighted: usize = counts
        .iter()
        .take(depth)
        .enumerate()
        .map(|(i, count)| count * (depth - i))
        .sum();

    weighted as f64 / denominator as f64
}
