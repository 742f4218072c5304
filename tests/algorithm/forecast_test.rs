#[cfg(test)]
mod tests {
    use crate::utils::assert_close;
    use med_predict::algorithm::forecast::{buckets, weighted_average};
    use med_predict::config::MAX_FORECAST_DEPTH;
    use med_predict::models::ChartSymptom;
    use med_predict::utils::test::{
        date, datetime, fixture_today, sample_diseases, sample_doctors, sample_snapshot,
    };
    use med_predict::{DemandForecaster, DiagnosisRequest, Doctor, PredictionError};

    fn request(id: u32, doctor_id: u32, day: u32) -> DiagnosisRequest {
        DiagnosisRequest::new(id, 1, doctor_id, "", datetime(2024, 6, day, 12))
    }

    #[test]
    fn test_monotonic_weighting() {
        // Equal raw counts: the more recent bucket never contributes less
        for depth in 1..=6 {
            for older in 0..depth {
                for newer in 0..older {
                    let mut recent = vec![0; depth];
                    recent[newer] = 4;
                    let mut old = vec![0; depth];
                    old[older] = 4;
                    assert!(weighted_average(&recent, depth) >= weighted_average(&old, depth));
                }
            }
        }
    }

    #[test]
    fn test_request_volume_forecast() {
        let snapshot = sample_snapshot();
        let forecaster = DemandForecaster::new(&snapshot.diagnosis_requests, 5).unwrap();

        // Buckets of 7 days back from 2024-06-30 hold 3, 1 and 1 requests
        let forecast = forecaster.forecast_request_volume(fixture_today(), 7).unwrap();
        assert_close(forecast, 22.0 / 15.0, 1e-12);
    }

    #[test]
    fn test_bucket_membership_uses_creation_day() {
        let today = date(2024, 6, 30);
        let requests = vec![
            // Created on the anchor day itself: outside every bucket
            DiagnosisRequest::new(1, 1, 1, "", datetime(2024, 6, 30, 1)),
            // First day of the newest bucket, late in the evening
            DiagnosisRequest::new(2, 1, 1, "", datetime(2024, 6, 29, 23)),
            // Boundary between the first and second bucket
            DiagnosisRequest::new(3, 1, 1, "", datetime(2024, 6, 28, 0)),
        ];
        let forecaster = DemandForecaster::new(&requests, 2).unwrap();
        let layout = buckets(today, 2, 2).unwrap();

        let counts: Vec<usize> = layout.iter().map(|b| forecaster.requests_in(b).count()).collect();
        assert_eq!(counts, vec![2, 0]);
    }

    #[test]
    fn test_most_wanted_doctor() {
        let snapshot = sample_snapshot();
        let forecaster = DemandForecaster::new(&snapshot.diagnosis_requests, 5).unwrap();
        let doctors = sample_doctors();

        let demand = forecaster.doctor_demand(fixture_today(), 7, &doctors).unwrap();
        assert_close(demand[&1], 9.0 / 15.0, 1e-12);
        assert_close(demand[&2], 8.0 / 15.0, 1e-12);
        assert_close(demand[&3], 5.0 / 15.0, 1e-12);

        let doctor = forecaster.most_wanted_doctor(fixture_today(), 7, &doctors).unwrap();
        assert_eq!(doctor.map(|d| d.id), Some(1));

        assert_eq!(forecaster.most_wanted_doctor(fixture_today(), 7, &[]).unwrap(), None);
    }

    #[test]
    fn test_doctor_ties_go_to_lowest_id() {
        let requests = vec![request(1, 7, 29), request(2, 4, 29), request(3, 9, 1)];
        let doctors = vec![Doctor::new(7, "", ""), Doctor::new(4, "", ""), Doctor::new(9, "", "")];
        let forecaster = DemandForecaster::new(&requests, 5).unwrap();

        let doctor = forecaster.most_wanted_doctor(fixture_today(), 7, &doctors).unwrap();
        assert_eq!(doctor.map(|d| d.id), Some(4));
    }

    #[test]
    fn test_disease_and_symptom_counts() {
        let snapshot = sample_snapshot();
        let forecaster = DemandForecaster::new(&snapshot.diagnosis_requests, 5).unwrap();
        let diseases = sample_diseases();
        let today = fixture_today();

        // flu: requests 100 (bucket 0) and 300 (bucket 1)
        let flu = forecaster.disease_count_forecast(today, 7, 1, &diseases).unwrap();
        assert_close(flu, 9.0 / 15.0, 1e-12);

        // otitis: narrative of 200 and resolved id of 500, both in bucket 0
        let otitis = forecaster.disease_count_forecast(today, 7, 2, &diseases).unwrap();
        assert_close(otitis, 10.0 / 15.0, 1e-12);

        // headache is linked to charts 10, 20 (twice in bucket 0) and 30 (bucket 1)
        let headache = forecaster
            .symptom_count_forecast(today, 7, 1, &snapshot.chart_symptoms)
            .unwrap();
        assert_close(headache, 19.0 / 15.0, 1e-12);

        let duplicated = vec![
            ChartSymptom { chart_id: 40, symptom_id: 4 },
            ChartSymptom { chart_id: 40, symptom_id: 4 },
        ];
        let vomiting = forecaster
            .symptom_count_forecast(today, 7, 4, &duplicated)
            .unwrap();
        assert_close(vomiting, 6.0 / 15.0, 1e-12);
    }

    #[test]
    fn test_invalid_interval_and_depth() {
        let snapshot = sample_snapshot();
        let forecaster = DemandForecaster::new(&snapshot.diagnosis_requests, 5).unwrap();
        assert!(matches!(
            forecaster.forecast_request_volume(fixture_today(), 0),
            Err(PredictionError::InvalidInterval(0))
        ));
        assert!(matches!(
            DemandForecaster::new(&snapshot.diagnosis_requests, 0),
            Err(PredictionError::Config(_))
        ));
        assert!(matches!(
            DemandForecaster::new(&snapshot.diagnosis_requests, usize::MAX),
            Err(PredictionError::Config(_))
        ));

        // Deep look-back stops at the earliest representable day instead of failing
        let deep = DemandForecaster::new(&snapshot.diagnosis_requests, MAX_FORECAST_DEPTH).unwrap();
        assert!(deep.forecast_request_volume(fixture_today(), 365 * 1000).unwrap() >= 0.0);
    }

    #[test]
    fn test_disease_series() {
        let snapshot = sample_snapshot();
        let forecaster = DemandForecaster::new(&snapshot.diagnosis_requests, 5).unwrap();
        let diseases = sample_diseases();

        let series = forecaster
            .disease_series(fixture_today(), date(2024, 7, 1), date(2024, 7, 2), &diseases)
            .unwrap();

        assert_eq!(series.labels, vec!["flu", "otitis", "angina"]);
        assert_eq!(
            series.dates,
            vec![date(2024, 7, 1), date(2024, 7, 2), date(2024, 7, 3)]
        );
        assert_eq!(series.values_for("flu"), Some(&[0.33, 0.47][..]));
        assert_eq!(series.values_for("otitis"), Some(&[0.53, 0.6][..]));
        assert_eq!(series.values_for("angina"), Some(&[0.0, 0.0][..]));
    }
}
