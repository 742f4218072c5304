//! Clinic record models consumed by the prediction engine
//!
//! These are read-only views of the records kept by the surrounding clinic
//! service. The engine never mutates or persists them.

pub mod diagnosis;
pub mod disease;
pub mod patient;

pub use diagnosis::{DiagnosisRequest, Doctor};
pub use disease::{Disease, Symptom};
pub use patient::{Chart, ChartSymptom, Patient, Recognition};

/// Identifier of a disease in the catalog
pub type DiseaseId = u32;
/// Identifier of a symptom in the catalog
pub type SymptomId = u32;
/// Identifier of a patient
pub type PatientId = u32;
/// Identifier of a patient chart
pub type ChartId = u32;
/// Identifier of a doctor
pub type DoctorId = u32;
/// Identifier of a diagnosis request
pub type RequestId = u32;
