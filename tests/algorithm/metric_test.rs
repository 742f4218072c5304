#[cfg(test)]
mod tests {
    use crate::utils::{assert_close, default_birth_date, example_vector};
    use chrono::Duration;
    use med_predict::algorithm::metric::squared_difference;
    use med_predict::utils::test::date;
    use med_predict::{
        Dictionaries, EuclideanMetric, FeatureVectorBuilder, Metric, PredictionConfig,
        PredictionError, SymptomOrdering,
    };

    const SYMPTOMS: [(&str, &str); 3] = [
        ("headache", "strong"),
        ("sore throat", "mild"),
        ("cough", "moderate"),
    ];

    #[test]
    fn test_euclidean_end_to_end() {
        let john = example_vector(180.0, 80.0, "male", date(2002, 3, 1), &SYMPTOMS);
        let mary = example_vector(165.0, 58.0, "female", date(1998, 11, 25), &SYMPTOMS);

        let distance = EuclideanMetric::default().distance(&john, &mary).unwrap();
        assert_close(distance, 1.0145, 0.001);
    }

    #[test]
    fn test_metric_symmetry_and_self_distance() {
        let metric = EuclideanMetric::default();
        let a = example_vector(172.0, 68.0, "female", date(1979, 4, 2), &SYMPTOMS);
        let b = example_vector(
            190.0,
            101.0,
            "male",
            date(2001, 12, 24),
            &[("vomiting", "severe"), ("headache", "mild")],
        );

        assert_eq!(metric.distance(&a, &b).unwrap(), metric.distance(&b, &a).unwrap());
        assert_eq!(metric.distance(&a, &a).unwrap(), 0.0);
        assert_eq!(metric.distance(&b, &b).unwrap(), 0.0);
        assert!(metric.distance(&a, &b).unwrap() > 0.0);
    }

    #[test]
    fn test_temporal_term_is_normalised() {
        let born = date(1950, 1, 1);
        let a = example_vector(170.0, 70.0, "male", born, &[]);
        let b = example_vector(170.0, 70.0, "male", born + Duration::days(18250), &[]);
        assert_close(EuclideanMetric::default().distance(&a, &b).unwrap(), 1.0, 1e-12);

        // A shorter normalisation constant stretches the same gap
        let distance = EuclideanMetric::new(9125).distance(&a, &b).unwrap();
        assert_close(distance, 2.0, 1e-12);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let dictionaries = Dictionaries::standard();
        let config = PredictionConfig::default();
        let short = SymptomOrdering::from_names(["headache", "cough"]);

        let a = example_vector(170.0, 70.0, "male", default_birth_date(), &SYMPTOMS);
        let b = FeatureVectorBuilder::new(&dictionaries, &short, &config)
            .build(
                Some(170.0),
                Some(70.0),
                "male",
                default_birth_date(),
                [("cough", "mild")],
            )
            .unwrap();

        assert!(matches!(
            EuclideanMetric::default().distance(&a, &b),
            Err(PredictionError::DimensionMismatch { left: 4, right: 2 })
        ));
    }

    #[test]
    fn test_squared_difference() {
        assert_close(squared_difference(&[1.0, 2.0], &[0.0, 4.0]).unwrap(), 5.0, 1e-12);
        assert!(squared_difference(&[1.0], &[]).is_err());
    }
}
