//! k-nearest-neighbour disease classification
//!
//! The classifier holds an immutable labelled training set. Each query is
//! compared against every training vector, the `k` closest are kept (stable
//! order on equal distances, so earlier training vectors win), and their labels
//! are tallied over the candidate diseases.
//!
//! Ties in the tally go to the candidate listed first. Neighbour labels that are
//! not among the candidates do not vote. When no neighbour votes for any
//! candidate the prediction is absent.

pub mod quality;

pub use quality::{
    ClassificationResult, calculate_accuracy, most_common_prediction, rank_predictions,
    split_proportions,
};

use log::debug;
use smallvec::SmallVec;

use crate::algorithm::features::DiseaseVector;
use crate::algorithm::metric::Metric;
use crate::error::{PredictionError, Result};
use crate::models::Disease;

/// Neighbours kept inline before spilling to the heap
type Neighbours = SmallVec<[(usize, f64); 8]>;

/// k-nearest-neighbour classifier over a labelled training set
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    training_set: Vec<DiseaseVector>,
}

impl KnnClassifier {
    /// Create a classifier; every training vector must carry a disease label
    pub fn new(training_set: Vec<DiseaseVector>) -> Result<Self> {
        if let Some(index) = training_set.iter().position(|v| v.disease().is_none()) {
            return Err(PredictionError::MissingLabel { index });
        }
        Ok(Self { training_set })
    }

    /// The training vectors in insertion order
    #[must_use]
    pub fn training_set(&self) -> &[DiseaseVector] {
        &self.training_set
    }

    /// Number of training vectors
    #[must_use]
    pub fn len(&self) -> usize {
        self.training_set.len()
    }

    /// Whether the training set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.training_set.is_empty()
    }

    /// Classify one query vector
    ///
    /// Fails with `EmptyTrainingSet` when there is nothing to compare against,
    /// and with `InvalidNeighbourCount` unless `1 <= k <= training size`.
    pub fn classify_one<M: Metric>(
        &self,
        query: &DiseaseVector,
        k: usize,
        metric: &M,
        candidates: &[Disease],
    ) -> Result<ClassificationResult> {
        self.check_neighbour_count(k)?;

        let neighbours = self.nearest(query, k, metric)?;
        let predicted = self.vote(&neighbours, candidates).cloned();

        debug!(
            "Classified query (expected {:?}) as {:?} from {} neighbours",
            query.disease().map(|d| d.name.as_str()),
            predicted.as_ref().map(|d| d.name.as_str()),
            neighbours.len()
        );

        Ok(ClassificationResult::new(predicted, query.disease().cloned()))
    }

    /// Classify each query independently, in order
    pub fn classify_many<M: Metric>(
        &self,
        queries: &[DiseaseVector],
        k: usize,
        metric: &M,
        candidates: &[Disease],
    ) -> Result<Vec<ClassificationResult>> {
        self.check_neighbour_count(k)?;
        queries
            .iter()
            .map(|query| self.classify_one(query, k, metric, candidates))
            .collect()
    }

    /// Fraction of labelled testing vectors classified correctly
    pub fn accuracy<M: Metric>(
        &self,
        testing_set: &[DiseaseVector],
        k: usize,
        metric: &M,
        candidates: &[Disease],
    ) -> Result<f64> {
        let results = self.classify_many(testing_set, k, metric, candidates)?;
        Ok(calculate_accuracy(&results))
    }

    fn check_neighbour_count(&self, k: usize) -> Result<()> {
        if self.training_set.is_empty() {
            return Err(PredictionError::EmptyTrainingSet);
        }
        if k == 0 || k > self.training_set.len() {
            return Err(PredictionError::InvalidNeighbourCount {
                k,
                training_size: self.training_set.len(),
            });
        }
        Ok(())
    }

    /// Indices and distances of the `k` closest training vectors
    fn nearest<M: Metric>(&self, query: &DiseaseVector, k: usize, metric: &M) -> Result<Neighbours> {
        let mut distances = self
            .training_set
            .iter()
            .enumerate()
            .map(|(index, training)| {
                metric
                    .distance(training.features(), query.features())
                    .map(|distance| (index, distance))
            })
            .collect::<Result<Neighbours>>()?;

        distances.sort_by(|a, b| a.1.total_cmp(&b.1));
        distances.truncate(k);
        Ok(distances)
    }

    fn vote<'c>(&self, neighbours: &[(usize, f64)], candidates: &'c [Disease]) -> Option<&'c Disease> {
        let mut counts = vec![0usize; candidates.len()];
        for &(index, _) in neighbours {
            let Some(label) = self.training_set[index].disease() else {
                continue;
            };
            if let Some(slot) = candidates.iter().position(|c| c.id == label.id) {
                counts[slot] += 1;
            }
        }

        // First maximum wins
        let (best, &count) = counts
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, &usize)>, (i, c)| match best {
                Some((_, b)) if b >= c => best,
                _ => Some((i, c)),
            })?;

        (count > 0).then(|| &candidates[best])
    }
}
