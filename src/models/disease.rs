//! Disease and symptom catalog entries

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DiseaseId, SymptomId};

/// A disease from the catalog; its name is matched against diagnosis narratives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disease {
    /// Catalog identifier
    pub id: DiseaseId,
    /// Canonical display name
    pub name: String,
}

impl Disease {
    /// Create a new disease
    #[must_use]
    pub fn new(id: DiseaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// A symptom from the catalog; the catalog order is the canonical symptom ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symptom {
    /// Catalog identifier
    pub id: SymptomId,
    /// Canonical display name
    pub name: String,
}

impl Symptom {
    /// Create a new symptom
    #[must_use]
    pub fn new(id: SymptomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
