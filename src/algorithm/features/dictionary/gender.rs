//! Gender encoding

use super::CategoryDictionary;
use crate::error::{PredictionError, Result};

/// Standard gender vocabulary
const STANDARD_GENDERS: [(&str, f64); 2] = [("male", 0.0), ("female", 1.0)];

/// Case-insensitive mapping from gender to a numeric code
#[derive(Debug, Clone)]
pub struct GenderDictionary {
    inner: CategoryDictionary,
}

impl GenderDictionary {
    /// `male` → 0.0, `female` → 1.0
    #[must_use]
    pub fn standard() -> Self {
        Self {
            inner: CategoryDictionary::from_static("gender", &STANDARD_GENDERS, true),
        }
    }

    /// Build a custom vocabulary; codes must lie in `[0, 1]`
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Ok(Self {
            inner: CategoryDictionary::from_entries("gender", entries, true)?,
        })
    }

    /// Numeric code for `gender`, compared case-insensitively
    ///
    /// Unknown values are reported as `IllegalGender`.
    pub fn encode(&self, gender: &str) -> Result<f64> {
        self.inner
            .get(gender.trim())
            .ok_or_else(|| PredictionError::IllegalGender(gender.to_string()))
    }

    /// Access the underlying lookup table
    #[must_use]
    pub const fn as_dictionary(&self) -> &CategoryDictionary {
        &self.inner
    }
}
