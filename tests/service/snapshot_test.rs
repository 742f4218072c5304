#[cfg(test)]
mod tests {
    use std::path::Path;

    use med_predict::utils::test::{sample_snapshot, write_temp_json};
    use med_predict::{PredictionConfig, PredictionError, RecordSnapshot, RecordSource};

    #[test]
    fn test_snapshot_json_roundtrip_through_file() {
        let snapshot = sample_snapshot();
        let path = write_temp_json("snapshot-roundtrip", &snapshot).unwrap();

        let loaded = RecordSnapshot::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_partial_snapshot_defaults_to_empty() {
        let snapshot: RecordSnapshot =
            serde_json::from_str(r#"{"diseases": [{"id": 1, "name": "flu"}]}"#).unwrap();
        assert_eq!(snapshot.diseases().unwrap().len(), 1);
        assert!(snapshot.patients().unwrap().is_empty());
        assert!(snapshot.diagnosis_requests().unwrap().is_empty());
    }

    #[test]
    fn test_record_lookups() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.chart_ids_for_patient(1).unwrap(), vec![10, 11]);
        assert!(snapshot.chart_ids_for_patient(5).unwrap().is_empty());
        assert_eq!(snapshot.recognitions_for_chart(10).unwrap().len(), 3);
        assert_eq!(snapshot.diagnosis_requests_for_chart(20).unwrap().len(), 2);
        assert_eq!(snapshot.chart(40).unwrap().patient_id, 4);
        assert_eq!(snapshot.doctor(2).unwrap().last_name, "Lis");
        assert!(matches!(snapshot.patient(99), Err(PredictionError::NotFound(_))));
    }

    #[test]
    fn test_missing_files_are_reported() {
        let missing = Path::new("/nonexistent/snapshot.json");
        assert!(matches!(
            RecordSnapshot::from_json_file(missing),
            Err(PredictionError::NotFound(_))
        ));
        assert!(PredictionConfig::from_json_file(missing).is_err());
    }

    #[test]
    fn test_config_file_fills_defaults() {
        let path = write_temp_json(
            "config-partial",
            &serde_json::json!({"neighbours": 3, "unknown_symptom_value": "reject"}),
        )
        .unwrap();
        let config = PredictionConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.neighbours, 3);
        assert_eq!(config.forecast_depth, 5);
        assert_eq!(config.max_date_diff_days, 18250);
        assert_eq!(config.unknown_symptom_value, med_predict::UnknownSymptomValue::Reject);
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let path = write_temp_json("config-invalid", &serde_json::json!({"neighbours": 0})).unwrap();
        let result = PredictionConfig::from_json_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(PredictionError::Config(_))));
    }
}
