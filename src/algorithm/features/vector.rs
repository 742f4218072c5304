//! Feature vectors
//!
//! A [`FeatureVector`] is the numeric encoding of one patient: normalised
//! height, weight and gender code, the birth date (only ever compared through
//! the temporal distance term), and one severity weight per symptom of the
//! canonical ordering. Every vector built with the same [`SymptomOrdering`] has
//! the same number of symptom features.

use chrono::NaiveDate;
use log::warn;
use rustc_hash::FxHashMap;

use super::dictionary::Dictionaries;
use crate::algorithm::parser::AlignedSymptoms;
use crate::config::{PredictionConfig, UnknownSymptomValue};
use crate::error::{PredictionError, Result};
use crate::models::{Disease, Patient, Symptom};

/// Immutable numeric encoding of a patient
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    height: f64,
    weight: f64,
    gender: f64,
    birth_date: NaiveDate,
    symptoms: Vec<f64>,
}

impl FeatureVector {
    /// `[height_norm, weight_norm, gender_code]`
    #[must_use]
    pub const fn personal_info_features(&self) -> [f64; 3] {
        [self.height, self.weight, self.gender]
    }

    /// Dates compared by the temporal distance term
    #[must_use]
    pub fn date_features(&self) -> &[NaiveDate] {
        std::slice::from_ref(&self.birth_date)
    }

    /// Severity weights aligned with the canonical symptom ordering
    #[must_use]
    pub fn symptom_features(&self) -> &[f64] {
        &self.symptoms
    }

    /// Number of symptom features
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.symptoms.len()
    }
}

/// A feature vector tagged with the disease it was observed with
///
/// Training vectors always carry a label; a query vector does not.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseVector {
    disease: Option<Disease>,
    features: FeatureVector,
}

impl DiseaseVector {
    /// A labeled vector
    #[must_use]
    pub const fn labeled(disease: Disease, features: FeatureVector) -> Self {
        Self {
            disease: Some(disease),
            features,
        }
    }

    /// An unlabeled (query) vector
    #[must_use]
    pub const fn unlabeled(features: FeatureVector) -> Self {
        Self {
            disease: None,
            features,
        }
    }

    /// A vector with an optional label
    #[must_use]
    pub const fn new(disease: Option<Disease>, features: FeatureVector) -> Self {
        Self { disease, features }
    }

    /// The disease label, if any
    #[must_use]
    pub const fn disease(&self) -> Option<&Disease> {
        self.disease.as_ref()
    }

    /// The encoded features
    #[must_use]
    pub const fn features(&self) -> &FeatureVector {
        &self.features
    }
}

/// The canonical, total ordering of all known symptoms
#[derive(Debug, Clone, Default)]
pub struct SymptomOrdering {
    names: Vec<String>,
    positions: FxHashMap<String, usize>,
}

impl SymptomOrdering {
    /// Ordering taken from the symptom catalog, in catalog order
    #[must_use]
    pub fn from_symptoms(symptoms: &[Symptom]) -> Self {
        Self::from_names(symptoms.iter().map(|s| s.name.as_str()))
    }

    /// Ordering taken from a list of names; repeated names keep their first position
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordering = Self::default();
        for name in names {
            let name = name.into();
            if ordering.positions.contains_key(&name) {
                continue;
            }
            ordering.positions.insert(name.clone(), ordering.names.len());
            ordering.names.push(name);
        }
        ordering
    }

    /// Position of a symptom, if known
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Symptom names in canonical order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of symptoms
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no symptom is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Validates raw patient attributes and encodes them as [`FeatureVector`]s
#[derive(Debug, Clone, Copy)]
pub struct FeatureVectorBuilder<'a> {
    dictionaries: &'a Dictionaries,
    ordering: &'a SymptomOrdering,
    config: &'a PredictionConfig,
}

impl<'a> FeatureVectorBuilder<'a> {
    /// Create a builder over the given dictionaries, ordering and limits
    #[must_use]
    pub const fn new(
        dictionaries: &'a Dictionaries,
        ordering: &'a SymptomOrdering,
        config: &'a PredictionConfig,
    ) -> Self {
        Self {
            dictionaries,
            ordering,
            config,
        }
    }

    /// The canonical ordering vectors are aligned to
    #[must_use]
    pub const fn ordering(&self) -> &'a SymptomOrdering {
        self.ordering
    }

    /// Encode raw attributes and a `symptom name → qualitative value` mapping
    ///
    /// Symptoms missing from the mapping are encoded as not reported. A name
    /// outside the canonical ordering fails with `UnknownSymptom`; a value outside
    /// the severity dictionary is handled per [`UnknownSymptomValue`].
    pub fn build<I, K, V>(
        &self,
        height: Option<f64>,
        weight: Option<f64>,
        gender: &str,
        birth_date: NaiveDate,
        symptoms: I,
    ) -> Result<FeatureVector>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let height = self.normalize_height(height)?;
        let weight = self.normalize_weight(weight)?;
        let gender = self.dictionaries.gender.encode(gender)?;
        let symptoms = self.encode_symptoms(symptoms)?;

        Ok(FeatureVector {
            height,
            weight,
            gender,
            birth_date,
            symptoms,
        })
    }

    /// Encode a patient together with their aligned symptom observations
    pub fn build_for_patient(
        &self,
        patient: &Patient,
        symptoms: &AlignedSymptoms,
    ) -> Result<FeatureVector> {
        self.build(
            patient.height,
            patient.weight,
            &patient.gender,
            patient.birth_date,
            symptoms.iter(),
        )
    }

    fn normalize_height(&self, height: Option<f64>) -> Result<f64> {
        let height = height.ok_or_else(|| PredictionError::IllegalHeight("missing".to_string()))?;
        if !(height > 0.0) {
            return Err(PredictionError::IllegalHeight(format!(
                "{height} is not positive"
            )));
        }
        if height > self.config.max_height {
            return Err(PredictionError::IllegalHeight(format!(
                "{height} exceeds {}",
                self.config.max_height
            )));
        }
        Ok(height / self.config.max_height)
    }

    fn normalize_weight(&self, weight: Option<f64>) -> Result<f64> {
        let weight = weight.ok_or_else(|| PredictionError::IllegalWeight("missing".to_string()))?;
        if !(weight > 0.0) {
            return Err(PredictionError::IllegalWeight(format!(
                "{weight} is not positive"
            )));
        }
        if weight > self.config.max_weight {
            return Err(PredictionError::IllegalWeight(format!(
                "{weight} exceeds {}",
                self.config.max_weight
            )));
        }
        Ok(weight / self.config.max_weight)
    }

    fn encode_symptoms<I, K, V>(&self, symptoms: I) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut features = vec![0.0; self.ordering.len()];

        for (name, value) in symptoms {
            let (name, value) = (name.as_ref(), value.as_ref());
            let position = self
                .ordering
                .position(name)
                .ok_or_else(|| PredictionError::UnknownSymptom(name.to_string()))?;

            features[position] = match self.dictionaries.severity.get(value) {
                Some(weight) => weight,
                None => match self.config.unknown_symptom_value {
                    UnknownSymptomValue::Absent => {
                        warn!("Unknown severity '{value}' for symptom '{name}', encoding as absent");
                        0.0
                    }
                    UnknownSymptomValue::Reject => {
                        return Err(PredictionError::unknown_category(
                            self.dictionaries.severity.as_dictionary().name(),
                            value,
                        ));
                    }
                },
            };
        }

        Ok(features)
    }
}
