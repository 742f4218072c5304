#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Utc};
    use med_predict::utils::test::{date, datetime};
    use med_predict::{DiagnosisRequest, Disease, Patient};

    #[test]
    fn test_diagnosis_request_creation() {
        let request = DiagnosisRequest::new(1, 10, 3, "otitis media", datetime(2024, 2, 29, 23));

        assert_eq!(request.chart_id, 10);
        assert_eq!(request.doctor_id, 3);
        assert_eq!(request.disease_id, None);
        assert_eq!(request.creation_day(), date(2024, 2, 29));
        assert!(request.has_narrative());
    }

    #[test]
    fn test_resolved_disease_without_narrative() {
        let request = DiagnosisRequest::new(2, 10, 3, "   ", datetime(2024, 3, 1, 8)).with_disease(4);
        assert_eq!(request.disease_id, Some(4));
        assert!(!request.has_narrative());
    }

    #[test]
    fn test_utc_timestamps_use_local_calendar_day() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let request = DiagnosisRequest::from_utc(3, 10, 3, "flu", utc);
        assert_eq!(request.creation_day(), utc.with_timezone(&Local).date_naive());
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let request: DiagnosisRequest = serde_json::from_str(
            r#"{"id": 5, "chart_id": 20, "doctor_id": 1, "created_at": "2024-06-01T09:15:00"}"#,
        )
        .unwrap();
        assert_eq!(request.diagnosis, "");
        assert_eq!(request.disease_id, None);
        assert_eq!(request.creation_day(), date(2024, 6, 1));
    }

    #[test]
    fn test_patient_age() {
        let patient = Patient::new(1, 170.0, 70.0, "female", date(2000, 6, 15));
        assert_eq!(patient.age_at(date(2024, 6, 14)), 23);
        assert_eq!(patient.age_at(date(2024, 6, 15)), 24);
        assert_eq!(patient.age_at(date(1999, 1, 1)), 0);
    }

    #[test]
    fn test_disease_display() {
        assert_eq!(Disease::new(8, "otitis").to_string(), "otitis (#8)");
    }
}
