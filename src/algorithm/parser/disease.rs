//! Disease extraction from diagnosis narratives
//!
//! Matching is a plain, case-sensitive substring test of each catalog name
//! against the narrative. There is no tokenisation or negation handling, so
//! "ruled out pneumonia" still yields pneumonia.

use crate::models::Disease;

/// Whether the narrative mentions the disease by its exact catalog name
#[must_use]
pub fn mentions_disease(narrative: &str, disease: &Disease) -> bool {
    !disease.name.is_empty() && narrative.contains(disease.name.as_str())
}

/// All catalog diseases whose name occurs in the narrative, in catalog order
///
/// An empty result is a normal outcome, not an error.
#[must_use]
pub fn extract_diseases<'a>(narrative: &str, catalog: &'a [Disease]) -> Vec<&'a Disease> {
    if narrative.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|disease| mentions_disease(narrative, disease))
        .collect()
}
