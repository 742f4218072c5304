//! Patient, chart and symptom observation records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ChartId, PatientId, SymptomId};

/// Personal attributes of a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Patient identifier
    pub id: PatientId,
    /// Height in cm, if recorded
    pub height: Option<f64>,
    /// Weight in kg, if recorded
    pub weight: Option<f64>,
    /// Gender as entered (e.g. "male", "Female")
    pub gender: String,
    /// Date of birth
    pub birth_date: NaiveDate,
}

impl Patient {
    /// Create a new patient
    #[must_use]
    pub fn new(
        id: PatientId,
        height: f64,
        weight: f64,
        gender: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            height: Some(height),
            weight: Some(weight),
            gender: gender.into(),
            birth_date,
        }
    }

    /// Age in completed years at the given date (0 for dates before birth)
    #[must_use]
    pub fn age_at(&self, date: NaiveDate) -> u32 {
        date.years_since(self.birth_date).unwrap_or(0)
    }
}

/// A patient chart; symptom observations and diagnosis requests hang off it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Chart identifier
    pub id: ChartId,
    /// Owning patient
    pub patient_id: PatientId,
}

/// A reported symptom severity on a chart ("recognition")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recognition {
    /// Chart the observation belongs to
    pub chart_id: ChartId,
    /// Observed symptom
    pub symptom_id: SymptomId,
    /// Qualitative severity, e.g. "mild" or "strong"
    pub value: String,
}

impl Recognition {
    /// Create a new recognition record
    #[must_use]
    pub fn new(chart_id: ChartId, symptom_id: SymptomId, value: impl Into<String>) -> Self {
        Self {
            chart_id,
            symptom_id,
            value: value.into(),
        }
    }
}

/// A plain link between a chart and a symptom, used for symptom demand counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSymptom {
    /// Linked chart
    pub chart_id: ChartId,
    /// Linked symptom
    pub symptom_id: SymptomId,
}
