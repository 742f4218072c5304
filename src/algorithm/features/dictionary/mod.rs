//! Categorical dictionaries used by feature encoding
//!
//! Both dictionaries map a categorical string to a weight in `[0, 1]`. They are
//! built once, never mutated, and passed explicitly to the feature builder, so
//! one instance can be shared by concurrent readers.

pub mod gender;
pub mod severity;

use rustc_hash::FxHashMap;

use crate::error::{PredictionError, Result};

pub use gender::GenderDictionary;
pub use severity::{ABSENT_SYMPTOM, SeverityDictionary};

/// Lookup table from a categorical key to a normalised weight
#[derive(Debug, Clone)]
pub struct CategoryDictionary {
    name: &'static str,
    entries: FxHashMap<String, f64>,
    case_insensitive: bool,
}

impl CategoryDictionary {
    /// Build a dictionary from `(key, weight)` pairs
    ///
    /// Fails with a configuration error when a weight lies outside `[0, 1]`.
    pub fn from_entries<I, K>(name: &'static str, entries: I, case_insensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut map = FxHashMap::default();
        for (key, weight) in entries {
            let key = key.into();
            if !(0.0..=1.0).contains(&weight) {
                return Err(PredictionError::Config(format!(
                    "{name} weight for '{key}' must lie in [0, 1], got {weight}"
                )));
            }
            let key = if case_insensitive { key.to_lowercase() } else { key };
            map.insert(key, weight);
        }

        Ok(Self {
            name,
            entries: map,
            case_insensitive,
        })
    }

    /// Build a dictionary from a built-in table whose weights are known to be in range
    pub(crate) fn from_static(
        name: &'static str,
        entries: &[(&str, f64)],
        case_insensitive: bool,
    ) -> Self {
        let entries = entries
            .iter()
            .map(|(key, weight)| {
                let key = if case_insensitive {
                    key.to_lowercase()
                } else {
                    (*key).to_string()
                };
                (key, *weight)
            })
            .collect();

        Self {
            name,
            entries,
            case_insensitive,
        }
    }

    /// Weight for `key`, or `UnknownCategory` when absent
    pub fn lookup(&self, key: &str) -> Result<f64> {
        self.get(key)
            .ok_or_else(|| PredictionError::unknown_category(self.name, key))
    }

    /// Weight for `key`, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        if self.case_insensitive {
            self.entries.get(&key.to_lowercase()).copied()
        } else {
            self.entries.get(key).copied()
        }
    }

    /// Dictionary name used in error messages
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The pair of dictionaries consulted when building feature vectors
#[derive(Debug, Clone)]
pub struct Dictionaries {
    /// Gender encoding
    pub gender: GenderDictionary,
    /// Symptom severity encoding
    pub severity: SeverityDictionary,
}

impl Dictionaries {
    /// The standard gender and severity vocabularies
    #[must_use]
    pub fn standard() -> Self {
        Self {
            gender: GenderDictionary::standard(),
            severity: SeverityDictionary::standard(),
        }
    }

    /// Combine custom dictionaries
    #[must_use]
    pub const fn new(gender: GenderDictionary, severity: SeverityDictionary) -> Self {
        Self { gender, severity }
    }
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self::standard()
    }
}
