//! Read-only access to clinic records
//!
//! The engine never writes records. It reads them through [`RecordSource`],
//! which a database-backed store or the in-memory [`RecordSnapshot`] implements.
//! Only the collection accessors are required; the per-entity lookups have
//! default implementations built on them.

pub mod snapshot;

pub use snapshot::RecordSnapshot;

use crate::error::{PredictionError, Result};
use crate::models::{
    Chart, ChartId, ChartSymptom, DiagnosisRequest, Disease, Doctor, DoctorId, Patient,
    PatientId, Recognition, Symptom,
};

/// Source of historical clinic records
pub trait RecordSource {
    /// The disease catalog
    fn diseases(&self) -> Result<Vec<Disease>>;

    /// The symptom catalog in canonical order
    fn symptoms(&self) -> Result<Vec<Symptom>>;

    /// All patients
    fn patients(&self) -> Result<Vec<Patient>>;

    /// All charts
    fn charts(&self) -> Result<Vec<Chart>>;

    /// All symptom observations
    fn recognitions(&self) -> Result<Vec<Recognition>>;

    /// All chart-symptom links
    fn chart_symptoms(&self) -> Result<Vec<ChartSymptom>>;

    /// All diagnosis requests
    fn diagnosis_requests(&self) -> Result<Vec<DiagnosisRequest>>;

    /// All doctors
    fn doctors(&self) -> Result<Vec<Doctor>>;

    /// A patient by id
    fn patient(&self, id: PatientId) -> Result<Patient> {
        self.patients()?
            .into_iter()
            .find(|patient| patient.id == id)
            .ok_or_else(|| PredictionError::NotFound(format!("patient {id}")))
    }

    /// A chart by id
    fn chart(&self, id: ChartId) -> Result<Chart> {
        self.charts()?
            .into_iter()
            .find(|chart| chart.id == id)
            .ok_or_else(|| PredictionError::NotFound(format!("chart {id}")))
    }

    /// A doctor by id
    fn doctor(&self, id: DoctorId) -> Result<Doctor> {
        self.doctors()?
            .into_iter()
            .find(|doctor| doctor.id == id)
            .ok_or_else(|| PredictionError::NotFound(format!("doctor {id}")))
    }

    /// Ids of the charts owned by a patient, in record order
    fn chart_ids_for_patient(&self, patient_id: PatientId) -> Result<Vec<ChartId>> {
        Ok(self
            .charts()?
            .into_iter()
            .filter(|chart| chart.patient_id == patient_id)
            .map(|chart| chart.id)
            .collect())
    }

    /// Symptom observations recorded on a chart
    fn recognitions_for_chart(&self, chart_id: ChartId) -> Result<Vec<Recognition>> {
        Ok(self
            .recognitions()?
            .into_iter()
            .filter(|recognition| recognition.chart_id == chart_id)
            .collect())
    }

    /// Diagnosis requests raised on a chart
    fn diagnosis_requests_for_chart(&self, chart_id: ChartId) -> Result<Vec<DiagnosisRequest>> {
        Ok(self
            .diagnosis_requests()?
            .into_iter()
            .filter(|request| request.chart_id == chart_id)
            .collect())
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn diseases(&self) -> Result<Vec<Disease>> {
        (**self).diseases()
    }

    fn symptoms(&self) -> Result<Vec<Symptom>> {
        (**self).symptoms()
    }

    fn patients(&self) -> Result<Vec<Patient>> {
        (**self).patients()
    }

    fn charts(&self) -> Result<Vec<Chart>> {
        (**self).charts()
    }

    fn recognitions(&self) -> Result<Vec<Recognition>> {
        (**self).recognitions()
    }

    fn chart_symptoms(&self) -> Result<Vec<ChartSymptom>> {
        (**self).chart_symptoms()
    }

    fn diagnosis_requests(&self) -> Result<Vec<DiagnosisRequest>> {
        (**self).diagnosis_requests()
    }

    fn doctors(&self) -> Result<Vec<Doctor>> {
        (**self).doctors()
    }

    fn patient(&self, id: PatientId) -> Result<Patient> {
        (**self).patient(id)
    }

    fn chart(&self, id: ChartId) -> Result<Chart> {
        (**self).chart(id)
    }

    fn doctor(&self, id: DoctorId) -> Result<Doctor> {
        (**self).doctor(id)
    }

    fn chart_ids_for_patient(&self, patient_id: PatientId) -> Result<Vec<ChartId>> {
        (**self).chart_ids_for_patient(patient_id)
    }

    fn recognitions_for_chart(&self, chart_id: ChartId) -> Result<Vec<Recognition>> {
        (**self).recognitions_for_chart(chart_id)
    }

    fn diagnosis_requests_for_chart(&self, chart_id: ChartId) -> Result<Vec<DiagnosisRequest>> {
        (**self).diagnosis_requests_for_chart(chart_id)
    }
}
