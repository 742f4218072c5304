//! Distance metrics between feature vectors

pub mod euclidean;

pub use euclidean::EuclideanMetric;

use crate::algorithm::features::FeatureVector;
use crate::error::{PredictionError, Result};

/// A dissimilarity measure between two feature vectors
pub trait Metric {
    /// Non-negative distance between `a` and `b`
    ///
    /// Fails with `DimensionMismatch` when the vectors have a different number
    /// of symptom features.
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64>;
}

impl<M: Metric + ?Sized> Metric for &M {
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
        (**self).distance(a, b)
    }
}

/// Sum of squared differences of two equally long slices
pub fn squared_difference(left: &[f64], right: &[f64]) -> Result<f64> {
    if left.len() != right.len() {
        return Err(PredictionError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    Ok(left
        .iter()
        .zip(right)
        .map(|(l, r)| (l - r).powi(2))
        .sum())
}
