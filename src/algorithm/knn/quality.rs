//! Classification results and quality measures

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{PredictionError, Result};
use crate::models::{Disease, DiseaseId};

/// Outcome of classifying one vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Predicted disease, absent if no candidate received a vote
    pub predicted: Option<Disease>,
    /// Known label of the classified vector, if any
    pub expected: Option<Disease>,
}

impl ClassificationResult {
    #[must_use]
    pub const fn new(predicted: Option<Disease>, expected: Option<Disease>) -> Self {
        Self {
            predicted,
            expected,
        }
    }

    /// Whether the prediction matches the expected label
    ///
    /// Diseases are compared by name. Returns `None` when there is no expected
    /// label to compare against.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        let expected = self.expected.as_ref()?;
        Some(
            self.predicted
                .as_ref()
                .is_some_and(|predicted| predicted.name == expected.name),
        )
    }
}

/// Fraction of results whose prediction matches the expected label
///
/// Results without an expected label are left out. If none remain the accuracy
/// is `0.0`.
#[must_use]
pub fn calculate_accuracy(results: &[ClassificationResult]) -> f64 {
    let (correct, total) = results
        .iter()
        .filter_map(ClassificationResult::is_correct)
        .fold((0usize, 0usize), |(correct, total), hit| {
            (correct + usize::from(hit), total + 1)
        });

    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}

/// Split `size` items into learning and testing counts by an `a:b` proportion
///
/// `parts` must hold exactly two non-negative integers. The learning count is
/// `a * floor(size / (a + b))`; the testing count is the remainder.
///
/// ```
/// use med_predict::algorithm::knn::split_proportions;
///
/// assert_eq!(split_proportions(&["7", "3"], 25).unwrap(), (14, 11));
/// ```
pub fn split_proportions(parts: &[&str], size: usize) -> Result<(usize, usize)> {
    let &[learning, testing] = parts else {
        return Err(PredictionError::IllegalProportion(format!(
            "expected exactly two parts, got {}",
            parts.len()
        )));
    };

    let parse = |part: &str| {
        part.trim().parse::<usize>().map_err(|_| {
            PredictionError::IllegalProportion(format!("'{part}' is not a non-negative integer"))
        })
    };
    let (learning, testing) = (parse(learning)?, parse(testing)?);

    let whole = learning.checked_add(testing).ok_or_else(|| {
        PredictionError::IllegalProportion(format!("{learning}:{testing} overflows"))
    })?;
    if whole == 0 {
        return Err(PredictionError::IllegalProportion(
            "proportion parts sum to zero".to_string(),
        ));
    }

    let learning_size = learning
        .checked_mul(size / whole)
        .ok_or_else(|| PredictionError::IllegalProportion(format!("{learning}:{testing} overflows")))?
        .min(size);
    Ok((learning_size, size - learning_size))
}

/// Predicted diseases with their counts, most frequent first
///
/// Equal counts keep the order in which the disease was first predicted.
#[must_use]
pub fn rank_predictions(results: &[ClassificationResult]) -> Vec<(Disease, usize)> {
    let mut slots: FxHashMap<DiseaseId, usize> = FxHashMap::default();
    let mut tally: Vec<(Disease, usize)> = Vec::new();

    for disease in results.iter().filter_map(|r| r.predicted.as_ref()) {
        match slots.get(&disease.id) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                slots.insert(disease.id, tally.len());
                tally.push((disease.clone(), 1));
            }
        }
    }

    tally
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .collect()
}

/// The most frequently predicted disease, if any result carries a prediction
#[must_use]
pub fn most_common_prediction(results: &[ClassificationResult]) -> Option<Disease> {
    rank_predictions(results)
        .into_iter()
        .next()
        .map(|(disease, _)| disease)
}
