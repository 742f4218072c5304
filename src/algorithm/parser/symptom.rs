//! Symptom alignment
//!
//! Chart observations are sparse: only the symptoms a patient reported are
//! recorded. Alignment expands them into one entry per catalog symptom, in
//! catalog order, filling unreported symptoms with [`ABSENT_SYMPTOM`].

use log::warn;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::features::ABSENT_SYMPTOM;
use crate::models::{Recognition, Symptom, SymptomId};

/// Complete `symptom name → qualitative value` mapping in canonical order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedSymptoms {
    entries: Vec<(String, String)>,
}

impl AlignedSymptoms {
    /// Iterate `(name, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Value recorded for a symptom
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Symptom names in canonical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of symptoms that carry a reported value
    #[must_use]
    pub fn reported_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, value)| value != ABSENT_SYMPTOM)
            .count()
    }

    /// Number of entries (always the catalog size)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aligns chart observations to the symptom catalog
#[derive(Debug, Clone)]
pub struct SymptomAligner<'a> {
    catalog: &'a [Symptom],
    names_by_id: FxHashMap<SymptomId, &'a str>,
}

impl<'a> SymptomAligner<'a> {
    /// Create an aligner over the canonical symptom catalog
    #[must_use]
    pub fn new(catalog: &'a [Symptom]) -> Self {
        let names_by_id = catalog
            .iter()
            .map(|symptom| (symptom.id, symptom.name.as_str()))
            .collect();
        Self {
            catalog,
            names_by_id,
        }
    }

    /// Align the observations recorded on one chart
    ///
    /// When a symptom was recorded more than once the last observation wins.
    /// Observations of symptoms missing from the catalog are skipped.
    #[must_use]
    pub fn align(&self, recognitions: &[Recognition]) -> AlignedSymptoms {
        let mut recorded: FxHashMap<&str, &str> = FxHashMap::default();
        for recognition in recognitions {
            match self.names_by_id.get(&recognition.symptom_id) {
                Some(&name) => {
                    recorded.insert(name, recognition.value.as_str());
                }
                None => warn!(
                    "Chart {} references unknown symptom {}, skipping",
                    recognition.chart_id, recognition.symptom_id
                ),
            }
        }

        let entries = self
            .catalog
            .iter()
            .map(|symptom| {
                let value = recorded
                    .get(symptom.name.as_str())
                    .copied()
                    .unwrap_or(ABSENT_SYMPTOM);
                (symptom.name.clone(), value.to_string())
            })
            .collect();

        AlignedSymptoms { entries }
    }

    /// The all-absent mapping used for patients without a chart
    #[must_use]
    pub fn absent(&self) -> AlignedSymptoms {
        self.align(&[])
    }
}
