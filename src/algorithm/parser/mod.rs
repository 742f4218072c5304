//! Parsers that turn raw chart records into engine inputs
//!
//! - [`symptom`]: aligns sparse symptom observations to the symptom catalog
//! - [`disease`]: extracts catalog diseases from free-text diagnoses

pub mod disease;
pub mod symptom;

pub use disease::{extract_diseases, mentions_disease};
pub use symptom::{AlignedSymptoms, SymptomAligner};
