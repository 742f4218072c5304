//! In-memory record snapshot

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::RecordSource;
use crate::error::Result;
use crate::error::util::read_json;
use crate::models::{
    Chart, ChartId, ChartSymptom, DiagnosisRequest, Disease, Doctor, Patient, Recognition,
    Symptom, SymptomId,
};

/// A complete copy of the clinic records, held in memory
///
/// Every collection defaults to empty when missing from the JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSnapshot {
    pub diseases: Vec<Disease>,
    pub symptoms: Vec<Symptom>,
    pub patients: Vec<Patient>,
    pub charts: Vec<Chart>,
    pub recognitions: Vec<Recognition>,
    pub chart_symptoms: Vec<ChartSymptom>,
    pub diagnosis_requests: Vec<DiagnosisRequest>,
    pub doctors: Vec<Doctor>,
}

impl RecordSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a JSON document
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let snapshot: Self = read_json(path, "record snapshot")?;
        info!(
            "Loaded snapshot from {}: {} patients, {} charts, {} diagnosis requests",
            path.display(),
            snapshot.patients.len(),
            snapshot.charts.len(),
            snapshot.diagnosis_requests.len()
        );
        Ok(snapshot)
    }

    /// Record an observation together with its chart-symptom link
    pub fn observe(&mut self, chart_id: ChartId, symptom_id: SymptomId, value: impl Into<String>) {
        self.recognitions
            .push(Recognition::new(chart_id, symptom_id, value));
        self.chart_symptoms.push(ChartSymptom {
            chart_id,
            symptom_id,
        });
    }
}

impl RecordSource for RecordSnapshot {
    fn diseases(&self) -> Result<Vec<Disease>> {
        Ok(self.diseases.clone())
    }

    fn symptoms(&self) -> Result<Vec<Symptom>> {
        Ok(self.symptoms.clone())
    }

    fn patients(&self) -> Result<Vec<Patient>> {
        Ok(self.patients.clone())
    }

    fn charts(&self) -> Result<Vec<Chart>> {
        Ok(self.charts.clone())
    }

    fn recognitions(&self) -> Result<Vec<Recognition>> {
        Ok(self.recognitions.clone())
    }

    fn chart_symptoms(&self) -> Result<Vec<ChartSymptom>> {
        Ok(self.chart_symptoms.clone())
    }

    fn diagnosis_requests(&self) -> Result<Vec<DiagnosisRequest>> {
        Ok(self.diagnosis_requests.clone())
    }

    fn doctors(&self) -> Result<Vec<Doctor>> {
        Ok(self.doctors.clone())
    }
}
