//! Diagnosis request and doctor models
//!
//! A diagnosis request is the historical record the engine learns from: its
//! free-text narrative yields disease labels and its creation date feeds the
//! demand forecasts.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChartId, DiseaseId, DoctorId, RequestId};

/// A request for diagnosis raised on a chart and handled by a doctor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    /// Request identifier
    pub id: RequestId,
    /// Chart the request was raised on
    pub chart_id: ChartId,
    /// Doctor handling the request
    pub doctor_id: DoctorId,
    /// Disease resolved by the doctor, when one was selected from the catalog
    #[serde(default)]
    pub disease_id: Option<DiseaseId>,
    /// Free-text diagnosis narrative
    #[serde(default)]
    pub diagnosis: String,
    /// Creation timestamp in local wall-clock time
    pub created_at: NaiveDateTime,
}

impl DiagnosisRequest {
    /// Create a new diagnosis request
    #[must_use]
    pub fn new(
        id: RequestId,
        chart_id: ChartId,
        doctor_id: DoctorId,
        diagnosis: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            chart_id,
            doctor_id,
            disease_id: None,
            diagnosis: diagnosis.into(),
            created_at,
        }
    }

    /// Create a request from a UTC timestamp, converting it to the local time zone
    #[must_use]
    pub fn from_utc(
        id: RequestId,
        chart_id: ChartId,
        doctor_id: DoctorId,
        diagnosis: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new(
            id,
            chart_id,
            doctor_id,
            diagnosis,
            created_at.with_timezone(&Local).naive_local(),
        )
    }

    /// Attach the disease resolved by the doctor
    #[must_use]
    pub const fn with_disease(mut self, disease_id: DiseaseId) -> Self {
        self.disease_id = Some(disease_id);
        self
    }

    /// Local calendar day the request was created on
    #[must_use]
    pub fn creation_day(&self) -> NaiveDate {
        self.created_at.date()
    }

    /// Whether the narrative carries any text
    #[must_use]
    pub fn has_narrative(&self) -> bool {
        !self.diagnosis.trim().is_empty()
    }
}

/// A doctor that diagnosis requests are assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Doctor identifier
    pub id: DoctorId,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
}

impl Doctor {
    /// Create a new doctor
    #[must_use]
    pub fn new(id: DoctorId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
