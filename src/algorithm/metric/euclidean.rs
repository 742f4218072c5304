//! Euclidean distance over the concatenated feature groups
//!
//! The distance is `sqrt(personal + temporal + symptoms)` where
//! - `personal` is the squared difference of height, weight and gender code,
//! - `temporal` sums `(|Δdays| / max_date_diff)²` over paired date features,
//! - `symptoms` is the squared difference of the severity weights.

use super::{Metric, squared_difference};
use crate::algorithm::features::FeatureVector;
use crate::config::MAX_DATE_DIFF;
use crate::error::Result;

/// Plain Euclidean metric with day-normalised dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuclideanMetric {
    max_date_diff_days: i64,
}

impl EuclideanMetric {
    /// Metric normalising date differences by `max_date_diff_days`
    #[must_use]
    pub const fn new(max_date_diff_days: i64) -> Self {
        Self { max_date_diff_days }
    }

    fn temporal_term(&self, a: &FeatureVector, b: &FeatureVector) -> f64 {
        a.date_features()
            .iter()
            .zip(b.date_features())
            .map(|(left, right)| {
                let days = (*right - *left).num_days().abs();
                (days as f64 / self.max_date_diff_days as f64).powi(2)
            })
            .sum()
    }
}

impl Default for EuclideanMetric {
    fn default() -> Self {
        Self::new(MAX_DATE_DIFF)
    }
}

impl Metric for EuclideanMetric {
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
        let symptoms = squared_difference(a.symptom_features(), b.symptom_features())?;
        let personal =
            squared_difference(&a.personal_info_features(), &b.personal_info_features())?;
        let temporal = self.temporal_term(a, b);

        Ok((personal + temporal + symptoms).sqrt())
    }
}
