//! Feature encoding for disease prediction
//!
//! This module turns patient attributes and symptom observations into
//! numeric vectors, using the categorical dictionaries for gender and
//! symptom severity.

pub mod dictionary;
pub mod vector;

pub use dictionary::{
    ABSENT_SYMPTOM, CategoryDictionary, Dictionaries, GenderDictionary, SeverityDictionary,
};
pub use vector::{DiseaseVector, FeatureVector, FeatureVectorBuilder, SymptomOrdering};
