#[cfg(test)]
mod tests {
    use crate::utils::{assert_close, default_birth_date, example_vector};
    use med_predict::{
        Disease, DiseaseVector, EuclideanMetric, FeatureVector, KnnClassifier, PredictionError,
    };

    fn flu() -> Disease {
        Disease::new(1, "flu")
    }

    fn otitis() -> Disease {
        Disease::new(2, "otitis")
    }

    fn patient(symptoms: &[(&str, &str)]) -> FeatureVector {
        example_vector(175.0, 70.0, "male", default_birth_date(), symptoms)
    }

    fn far_patient() -> FeatureVector {
        example_vector(150.0, 45.0, "female", default_birth_date(), &[("vomiting", "severe")])
    }

    #[test]
    fn test_k1_returns_nearest_label() {
        let training = vec![
            DiseaseVector::labeled(otitis(), far_patient()),
            DiseaseVector::labeled(flu(), patient(&[("headache", "strong")])),
        ];
        let classifier = KnnClassifier::new(training).unwrap();
        let query = DiseaseVector::unlabeled(patient(&[("headache", "moderate")]));

        let result = classifier
            .classify_one(&query, 1, &EuclideanMetric::default(), &[flu(), otitis()])
            .unwrap();
        assert_eq!(result.predicted, Some(flu()));
        assert_eq!(result.expected, None);
        assert_eq!(result.is_correct(), None);
    }

    #[test]
    fn test_majority_vote() {
        // Two flu and one otitis vector in the query's neighbourhood; the otitis one is closest
        let training = vec![
            DiseaseVector::labeled(otitis(), patient(&[("headache", "strong")])),
            DiseaseVector::labeled(flu(), patient(&[("headache", "mild")])),
            DiseaseVector::labeled(flu(), patient(&[("headache", "rare")])),
            DiseaseVector::labeled(otitis(), far_patient()),
        ];
        let classifier = KnnClassifier::new(training).unwrap();
        let query = DiseaseVector::unlabeled(patient(&[("headache", "high")]));
        let metric = EuclideanMetric::default();
        let candidates = [flu(), otitis()];

        let nearest = classifier.classify_one(&query, 1, &metric, &candidates).unwrap();
        assert_eq!(nearest.predicted, Some(otitis()));

        let vote = classifier.classify_one(&query, 3, &metric, &candidates).unwrap();
        assert_eq!(vote.predicted, Some(flu()));
    }

    #[test]
    fn test_tally_ties_go_to_first_candidate() {
        let training = vec![
            DiseaseVector::labeled(flu(), patient(&[("cough", "mild")])),
            DiseaseVector::labeled(otitis(), patient(&[("cough", "moderate")])),
        ];
        let classifier = KnnClassifier::new(training).unwrap();
        let query = DiseaseVector::unlabeled(patient(&[("cough", "rare")]));
        let metric = EuclideanMetric::default();

        let result = classifier.classify_one(&query, 2, &metric, &[otitis(), flu()]).unwrap();
        assert_eq!(result.predicted, Some(otitis()));
        let result = classifier.classify_one(&query, 2, &metric, &[flu(), otitis()]).unwrap();
        assert_eq!(result.predicted, Some(flu()));
    }

    #[test]
    fn test_equal_distances_keep_training_order() {
        let same = patient(&[("headache", "strong")]);
        let training = vec![
            DiseaseVector::labeled(otitis(), same.clone()),
            DiseaseVector::labeled(flu(), same.clone()),
        ];
        let classifier = KnnClassifier::new(training).unwrap();
        let query = DiseaseVector::unlabeled(same);

        let result = classifier
            .classify_one(&query, 1, &EuclideanMetric::default(), &[flu(), otitis()])
            .unwrap();
        assert_eq!(result.predicted, Some(otitis()));
    }

    #[test]
    fn test_labels_outside_candidates_do_not_vote() {
        let training = vec![DiseaseVector::labeled(Disease::new(9, "measles"), far_patient())];
        let classifier = KnnClassifier::new(training).unwrap();
        let query = DiseaseVector::unlabeled(far_patient());

        let result = classifier
            .classify_one(&query, 1, &EuclideanMetric::default(), &[flu(), otitis()])
            .unwrap();
        assert_eq!(result.predicted, None);
    }

    #[test]
    fn test_structural_preconditions() {
        let metric = EuclideanMetric::default();
        let query = DiseaseVector::unlabeled(far_patient());

        let empty = KnnClassifier::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert!(matches!(
            empty.classify_one(&query, 1, &metric, &[flu()]),
            Err(PredictionError::EmptyTrainingSet)
        ));

        let classifier =
            KnnClassifier::new(vec![DiseaseVector::labeled(flu(), far_patient())]).unwrap();
        for k in [0, 2] {
            assert!(matches!(
                classifier.classify_one(&query, k, &metric, &[flu()]),
                Err(PredictionError::InvalidNeighbourCount { training_size: 1, .. })
            ));
        }

        let unlabeled = vec![
            DiseaseVector::labeled(flu(), far_patient()),
            DiseaseVector::unlabeled(far_patient()),
        ];
        assert!(matches!(
            KnnClassifier::new(unlabeled),
            Err(PredictionError::MissingLabel { index: 1 })
        ));
    }

    #[test]
    fn test_classify_many_and_accuracy() {
        let training = vec![
            DiseaseVector::labeled(flu(), patient(&[("headache", "strong")])),
            DiseaseVector::labeled(otitis(), far_patient()),
        ];
        let classifier = KnnClassifier::new(training).unwrap();
        let testing = vec![
            DiseaseVector::labeled(flu(), patient(&[("headache", "severe")])),
            DiseaseVector::labeled(flu(), far_patient()),
            DiseaseVector::labeled(otitis(), far_patient()),
            DiseaseVector::unlabeled(patient(&[])),
        ];
        let metric = EuclideanMetric::default();
        let candidates = [flu(), otitis()];

        let results = classifier.classify_many(&testing, 1, &metric, &candidates).unwrap();
        let predicted: Vec<_> = results.iter().map(|r| r.predicted.clone()).collect();
        assert_eq!(predicted, vec![Some(flu()), Some(otitis()), Some(otitis()), Some(flu())]);
        assert_eq!(results[1].is_correct(), Some(false));

        // The unlabelled query is left out: 2 of 3
        let accuracy = classifier.accuracy(&testing, 1, &metric, &candidates).unwrap();
        assert_close(accuracy, 2.0 / 3.0, 1e-12);
    }
}
