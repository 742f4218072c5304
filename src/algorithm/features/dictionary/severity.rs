//! Symptom severity encoding
//!
//! Qualitative severity adjectives reported on a chart are mapped to weights in
//! `[0, 1]`. The sentinel [`ABSENT_SYMPTOM`] means "not reported" and maps to 0.0.
//! Lookups are case-sensitive against the stored vocabulary.

use super::CategoryDictionary;
use crate::error::Result;

/// Qualitative value meaning the symptom was not reported
pub const ABSENT_SYMPTOM: &str = "null";

/// Standard severity vocabulary
const STANDARD_SEVERITIES: [(&str, f64); 27] = [
    (ABSENT_SYMPTOM, 0.0),
    ("mild", 0.2),
    ("strong", 0.8),
    ("moderate", 0.5),
    ("severe", 0.95),
    ("sharp", 0.9),
    ("frequent", 0.85),
    ("rare", 0.3),
    ("high", 0.6),
    ("very high", 0.75),
    ("extremely high", 1.0),
    ("low", 0.6),
    ("very low", 0.75),
    ("extremely low", 1.0),
    ("persistent", 0.65),
    ("clear", 0.1),
    ("sudden", 0.5),
    ("blurred", 0.35),
    ("restless", 0.4),
    ("intermittent", 0.4),
    ("vertigo", 0.6),
    ("itchy", 0.4),
    ("profuse", 0.9),
    ("cramping", 0.75),
    ("prolonged", 0.65),
    ("bloating", 0.15),
    ("chronic", 0.7),
];

/// Mapping from a qualitative severity to a normalised weight
#[derive(Debug, Clone)]
pub struct SeverityDictionary {
    inner: CategoryDictionary,
}

impl SeverityDictionary {
    /// The standard vocabulary
    #[must_use]
    pub fn standard() -> Self {
        Self {
            inner: CategoryDictionary::from_static("symptom severity", &STANDARD_SEVERITIES, false),
        }
    }

    /// Build a custom vocabulary
    ///
    /// The absent sentinel is always added with weight 0.0 unless supplied.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut entries: Vec<(String, f64)> = entries
            .into_iter()
            .map(|(key, weight)| (key.into(), weight))
            .collect();
        if !entries.iter().any(|(key, _)| key == ABSENT_SYMPTOM) {
            entries.push((ABSENT_SYMPTOM.to_string(), 0.0));
        }

        Ok(Self {
            inner: CategoryDictionary::from_entries("symptom severity", entries, false)?,
        })
    }

    /// Weight of `value`, or `UnknownCategory` when it is not in the vocabulary
    pub fn lookup(&self, value: &str) -> Result<f64> {
        self.inner.lookup(value)
    }

    /// Weight of `value`, if present
    #[must_use]
    pub fn get(&self, value: &str) -> Option<f64> {
        self.inner.get(value)
    }

    /// Access the underlying lookup table
    #[must_use]
    pub const fn as_dictionary(&self) -> &CategoryDictionary {
        &self.inner
    }
}
