//! Error handling for the prediction engine.

pub mod util;

use std::io;

/// Errors raised while building feature vectors, classifying or forecasting
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// Height missing, non-positive or above the configured maximum
    #[error("Illegal height: {0}")]
    IllegalHeight(String),

    /// Weight missing, non-positive or above the configured maximum
    #[error("Illegal weight: {0}")]
    IllegalWeight(String),

    /// Gender not present in the gender dictionary
    #[error("Illegal gender: '{0}'")]
    IllegalGender(String),

    /// Malformed learning/testing proportions
    #[error("Illegal proportion: {0}")]
    IllegalProportion(String),

    /// Key missing from one of the categorical dictionaries
    #[error("Unknown {dictionary} category: '{key}'")]
    UnknownCategory {
        /// Dictionary that was consulted
        dictionary: &'static str,
        /// Key that was looked up
        key: String,
    },

    /// Symptom name outside the canonical symptom ordering
    #[error("Unknown symptom: '{0}'")]
    UnknownSymptom(String),

    /// Two vectors with a different number of symptom features were compared
    #[error("Dimension mismatch: {left} vs {right} symptom features")]
    DimensionMismatch {
        /// Symptom feature count of the left operand
        left: usize,
        /// Symptom feature count of the right operand
        right: usize,
    },

    /// Classification attempted without any training vectors
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// `k` is zero or larger than the training set
    #[error("Invalid neighbour count {k} for a training set of {training_size}")]
    InvalidNeighbourCount {
        /// Requested neighbour count
        k: usize,
        /// Number of training vectors
        training_size: usize,
    },

    /// A training vector carries no disease label
    #[error("Training vector at index {index} has no disease label")]
    MissingLabel {
        /// Position of the offending vector in the training set
        index: usize,
    },

    /// Forecast interval of zero or negative days
    #[error("Invalid day interval: {0}")]
    InvalidInterval(i64),

    /// Age group string that is neither `"a-b"` nor `"a+"`
    #[error("Invalid age group: '{0}'")]
    InvalidAgeGroup(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Referenced record does not exist in the record source
    #[error("Not found: {0}")]
    NotFound(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding a JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PredictionError {
    /// Shorthand for an [`PredictionError::UnknownCategory`] error
    pub fn unknown_category(dictionary: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownCategory {
            dictionary,
            key: key.into(),
        }
    }

    /// Whether the error stems from invalid caller input rather than a broken precondition
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::IllegalHeight(_)
                | Self::IllegalWeight(_)
                | Self::IllegalGender(_)
                | Self::IllegalProportion(_)
                | Self::InvalidAgeGroup(_)
        )
    }
}

/// Result type for prediction operations
pub type Result<T> = std::result::Result<T, PredictionError>;
