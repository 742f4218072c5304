#[cfg(test)]
mod tests {
    use med_predict::algorithm::parser::mentions_disease;
    use med_predict::models::Recognition;
    use med_predict::utils::test::sample_symptoms;
    use med_predict::{Disease, SymptomAligner, extract_diseases};

    #[test]
    fn test_alignment_is_complete_and_ordered() {
        let catalog = sample_symptoms();
        let aligner = SymptomAligner::new(&catalog);
        let expected: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();

        let charted = aligner.align(&[
            Recognition::new(10, 3, "moderate"),
            Recognition::new(10, 1, "strong"),
        ]);
        assert_eq!(charted.names().collect::<Vec<_>>(), expected);
        assert_eq!(charted.get("cough"), Some("moderate"));
        assert_eq!(charted.get("headache"), Some("strong"));
        assert_eq!(charted.get("vomiting"), Some("null"));

        let never_examined = aligner.absent();
        assert_eq!(never_examined.names().collect::<Vec<_>>(), expected);
        assert!(never_examined.iter().all(|(_, value)| value == "null"));
        assert_eq!(never_examined.reported_count(), 0);
    }

    #[test]
    fn test_last_observation_wins() {
        let catalog = sample_symptoms();
        let aligner = SymptomAligner::new(&catalog);
        let aligned = aligner.align(&[
            Recognition::new(10, 2, "mild"),
            Recognition::new(10, 2, "severe"),
        ]);
        assert_eq!(aligned.get("sore throat"), Some("severe"));
        assert_eq!(aligned.len(), catalog.len());
    }

    #[test]
    fn test_extract_diseases() {
        let catalog = vec![
            Disease::new(1, "pneumonia"),
            Disease::new(8, "otitis"),
            Disease::new(9, "angina"),
        ];

        let found = extract_diseases("acute otitis of the left ear", &catalog);
        assert_eq!(found, vec![&catalog[1]]);

        let found = extract_diseases("otitis with suspected pneumonia", &catalog);
        assert_eq!(found, vec![&catalog[0], &catalog[1]]);

        assert!(extract_diseases("", &catalog).is_empty());
        assert!(extract_diseases("common cold", &catalog).is_empty());
    }

    #[test]
    fn test_extraction_is_naive_and_case_sensitive() {
        let pneumonia = Disease::new(1, "pneumonia");
        assert!(mentions_disease("ruled out pneumonia", &pneumonia));
        assert!(!mentions_disease("Pneumonia", &pneumonia));
    }
}
