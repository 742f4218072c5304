//! Disease prediction and demand forecasting over a record source
//!
//! Nothing is cached between calls: every operation reads the records it needs,
//! builds its training set or buckets, computes and returns.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::algorithm::features::{
    Dictionaries, DiseaseVector, FeatureVectorBuilder, SymptomOrdering,
};
use crate::algorithm::forecast::{AgeGroup, DemandForecaster, ForecastSeries};
use crate::algorithm::knn::{
    ClassificationResult, KnnClassifier, calculate_accuracy, most_common_prediction,
    rank_predictions, split_proportions,
};
use crate::algorithm::metric::EuclideanMetric;
use crate::algorithm::parser::{SymptomAligner, extract_diseases};
use crate::config::PredictionConfig;
use crate::error::{PredictionError, Result};
use crate::models::{
    ChartId, DiagnosisRequest, Disease, Doctor, Patient, PatientId, Symptom,
};
use crate::repository::RecordSource;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Catalogs read once per operation
struct Catalogs {
    diseases: Vec<Disease>,
    symptoms: Vec<Symptom>,
    ordering: SymptomOrdering,
}

/// Prediction and forecasting entry point
#[derive(Debug, Clone)]
pub struct PredictionService<S: RecordSource> {
    source: S,
    config: PredictionConfig,
    dictionaries: Dictionaries,
}

impl<S: RecordSource> PredictionService<S> {
    /// Create a service with the standard dictionaries
    pub fn new(source: S, config: PredictionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            dictionaries: Dictionaries::standard(),
        })
    }

    /// Replace the gender and severity dictionaries
    #[must_use]
    pub fn with_dictionaries(mut self, dictionaries: Dictionaries) -> Self {
        self.dictionaries = dictionaries;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PredictionConfig {
        &self.config
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn metric(&self) -> EuclideanMetric {
        EuclideanMetric::new(self.config.max_date_diff_days)
    }

    fn catalogs(&self) -> Result<Catalogs> {
        let diseases = self.source.diseases()?;
        let symptoms = self.source.symptoms()?;
        let ordering = SymptomOrdering::from_symptoms(&symptoms);
        Ok(Catalogs {
            diseases,
            symptoms,
            ordering,
        })
    }

    /// Labelled vectors from every chart with a diagnosis naming a catalog disease
    ///
    /// Each chart's aligned symptoms are paired with the diseases extracted from
    /// that chart's diagnosis requests, one vector per extracted disease.
    pub fn build_dataset(&self) -> Result<Vec<DiseaseVector>> {
        let catalogs = self.catalogs()?;
        self.dataset_from(&catalogs)
    }

    fn dataset_from(&self, catalogs: &Catalogs) -> Result<Vec<DiseaseVector>> {
        let start = Instant::now();
        log_operation_start("Building dataset from", "patient charts");

        let builder = FeatureVectorBuilder::new(&self.dictionaries, &catalogs.ordering, &self.config);
        let aligner = SymptomAligner::new(&catalogs.symptoms);

        let mut dataset = Vec::new();
        for patient in self.source.patients()? {
            for chart_id in self.source.chart_ids_for_patient(patient.id)? {
                let requests = self.source.diagnosis_requests_for_chart(chart_id)?;
                let labels: Vec<&Disease> = requests
                    .iter()
                    .flat_map(|request| extract_diseases(&request.diagnosis, &catalogs.diseases))
                    .collect();
                if labels.is_empty() {
                    continue;
                }

                let symptoms = aligner.align(&self.source.recognitions_for_chart(chart_id)?);
                let features = builder.build_for_patient(&patient, &symptoms)?;
                debug!(
                    "Chart {chart_id} of patient {} yields {} labelled vectors",
                    patient.id,
                    labels.len()
                );
                dataset.extend(
                    labels
                        .into_iter()
                        .map(|disease| DiseaseVector::labeled(disease.clone(), features.clone())),
                );
            }
        }

        log_operation_complete("built", "patient charts", dataset.len(), Some(start.elapsed()));
        Ok(dataset)
    }

    /// Unlabelled query vector for a patient, from one chart or without symptoms
    fn query_vector(
        &self,
        catalogs: &Catalogs,
        patient: &Patient,
        chart_id: Option<ChartId>,
    ) -> Result<DiseaseVector> {
        let builder = FeatureVectorBuilder::new(&self.dictionaries, &catalogs.ordering, &self.config);
        let aligner = SymptomAligner::new(&catalogs.symptoms);

        let symptoms = match chart_id {
            Some(chart_id) => aligner.align(&self.source.recognitions_for_chart(chart_id)?),
            None => aligner.absent(),
        };
        Ok(DiseaseVector::unlabeled(
            builder.build_for_patient(patient, &symptoms)?,
        ))
    }

    /// One query per chart of every patient, or an all-absent query for patients without charts
    fn patient_queries(&self, catalogs: &Catalogs) -> Result<Vec<DiseaseVector>> {
        let mut queries = Vec::new();
        for patient in self.source.patients()? {
            let chart_ids = self.source.chart_ids_for_patient(patient.id)?;
            if chart_ids.is_empty() {
                queries.push(self.query_vector(catalogs, &patient, None)?);
            }
            for chart_id in chart_ids {
                queries.push(self.query_vector(catalogs, &patient, Some(chart_id))?);
            }
        }
        Ok(queries)
    }

    fn classify(&self, catalogs: &Catalogs, queries: &[DiseaseVector]) -> Result<Vec<ClassificationResult>> {
        let classifier = KnnClassifier::new(self.dataset_from(catalogs)?)?;
        classifier.classify_many(
            queries,
            self.config.neighbours,
            &self.metric(),
            &catalogs.diseases,
        )
    }

    /// Most likely disease of a patient
    ///
    /// With a chart the query uses that chart's symptoms; without one it carries
    /// no symptom information. The chart must belong to the patient.
    pub fn predict_patient_disease(
        &self,
        patient_id: PatientId,
        chart_id: Option<ChartId>,
    ) -> Result<Option<Disease>> {
        let patient = self.source.patient(patient_id)?;
        if let Some(chart_id) = chart_id {
            let chart = self.source.chart(chart_id)?;
            if chart.patient_id != patient_id {
                return Err(PredictionError::NotFound(format!(
                    "chart {chart_id} of patient {patient_id}"
                )));
            }
        }

        let catalogs = self.catalogs()?;
        let query = self.query_vector(&catalogs, &patient, chart_id)?;
        let result = self
            .classify(&catalogs, std::slice::from_ref(&query))?
            .into_iter()
            .next()
            .and_then(|result| result.predicted);

        info!(
            "Predicted {} for patient {patient_id}",
            result.as_ref().map_or("no disease".to_string(), ToString::to_string)
        );
        Ok(result)
    }

    /// Most likely disease for the patient owning a chart
    pub fn predict_chart_disease(&self, chart_id: ChartId) -> Result<Option<Disease>> {
        let chart = self.source.chart(chart_id)?;
        self.predict_patient_disease(chart.patient_id, Some(chart_id))
    }

    /// Hold-out accuracy of the classifier
    ///
    /// `proportions` is a two-part `learning:testing` ratio such as `["7", "3"]`.
    /// The dataset is split in order: the first part trains, the rest is tested.
    pub fn prediction_accuracy(&self, proportions: &[&str]) -> Result<f64> {
        let catalogs = self.catalogs()?;
        let mut dataset = self.dataset_from(&catalogs)?;
        let (learning_size, testing_size) = split_proportions(proportions, dataset.len())?;
        let testing = dataset.split_off(learning_size);
        info!("Split dataset into {learning_size} learning and {testing_size} testing vectors");

        let classifier = KnnClassifier::new(dataset)?;
        let results = classifier.classify_many(
            &testing,
            self.config.neighbours,
            &self.metric(),
            &catalogs.diseases,
        )?;
        let accuracy = calculate_accuracy(&results);

        info!("Prediction accuracy: {accuracy:.4}");
        Ok(accuracy)
    }

    /// Name of the disease predicted most often across all patients
    pub fn statistic_disease(&self) -> Result<Option<String>> {
        let catalogs = self.catalogs()?;
        let queries = self.patient_queries(&catalogs)?;
        let results = self.classify(&catalogs, &queries)?;

        let disease = most_common_prediction(&results).map(|disease| disease.name);
        info!(
            "Most common predicted disease over {} queries: {}",
            queries.len(),
            disease.as_deref().unwrap_or("none")
        );
        Ok(disease)
    }

    /// The `n` diseases predicted most often over all charts
    pub fn top_n_diseases(&self, n: usize) -> Result<Vec<Disease>> {
        let catalogs = self.catalogs()?;
        let patients: FxHashMap<PatientId, Patient> = self
            .source
            .patients()?
            .into_iter()
            .map(|patient| (patient.id, patient))
            .collect();

        let mut queries = Vec::new();
        for chart in self.source.charts()? {
            let patient = patients
                .get(&chart.patient_id)
                .ok_or_else(|| PredictionError::NotFound(format!("patient {}", chart.patient_id)))?;
            queries.push(self.query_vector(&catalogs, patient, Some(chart.id))?);
        }

        let ranked = rank_predictions(&self.classify(&catalogs, &queries)?);
        if n > ranked.len() {
            log_warning(
                "Fewer predicted diseases than requested",
                Some(format!("{} of {n}", ranked.len()).as_str()),
            );
        }

        Ok(ranked.into_iter().take(n).map(|(disease, _)| disease).collect())
    }

    /// Forecast of diagnosis requests in the next `day_interval` days
    pub fn future_diagnosis_requests(&self, day_interval: i64) -> Result<f64> {
        self.future_diagnosis_requests_at(today(), day_interval)
    }

    /// [`Self::future_diagnosis_requests`] anchored at a given day
    pub fn future_diagnosis_requests_at(&self, today: NaiveDate, day_interval: i64) -> Result<f64> {
        let requests = self.source.diagnosis_requests()?;
        let forecast = DemandForecaster::new(&requests, self.config.forecast_depth)?
            .forecast_request_volume(today, day_interval)?;
        info!("Expecting {forecast:.2} diagnosis requests in the next {day_interval} days");
        Ok(forecast)
    }

    /// Doctor with the highest forecast demand over the next `day_interval` days
    pub fn most_wanted_doctor(&self, day_interval: i64) -> Result<Option<Doctor>> {
        self.most_wanted_doctor_at(today(), day_interval)
    }

    /// [`Self::most_wanted_doctor`] anchored at a given day
    pub fn most_wanted_doctor_at(&self, today: NaiveDate, day_interval: i64) -> Result<Option<Doctor>> {
        let requests = self.source.diagnosis_requests()?;
        let doctors = self.source.doctors()?;
        let doctor = DemandForecaster::new(&requests, self.config.forecast_depth)?
            .most_wanted_doctor(today, day_interval, &doctors)?
            .cloned();
        if doctor.is_none() {
            log_warning("No doctors to forecast demand for", None);
        }
        Ok(doctor)
    }

    /// Per-disease forecast series over `start..=end`
    pub fn disease_forecast_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        age_group: Option<&AgeGroup>,
    ) -> Result<ForecastSeries> {
        self.disease_forecast_series_at(today(), start, end, age_group)
    }

    /// [`Self::disease_forecast_series`] anchored at a given day
    pub fn disease_forecast_series_at(
        &self,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        age_group: Option<&AgeGroup>,
    ) -> Result<ForecastSeries> {
        log_operation_start("Forecasting disease series from", &format!("{start} to {end}"));
        let requests = self.requests_in_age_group(today, age_group)?;
        let diseases = self.source.diseases()?;
        DemandForecaster::new(&requests, self.config.forecast_depth)?
            .disease_series(today, start, end, &diseases)
    }

    /// Per-symptom forecast series over `start..=end`
    pub fn symptom_forecast_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        age_group: Option<&AgeGroup>,
    ) -> Result<ForecastSeries> {
        self.symptom_forecast_series_at(today(), start, end, age_group)
    }

    /// [`Self::symptom_forecast_series`] anchored at a given day
    pub fn symptom_forecast_series_at(
        &self,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        age_group: Option<&AgeGroup>,
    ) -> Result<ForecastSeries> {
        log_operation_start("Forecasting symptom series from", &format!("{start} to {end}"));
        let requests = self.requests_in_age_group(today, age_group)?;
        let symptoms = self.source.symptoms()?;
        let chart_symptoms = self.source.chart_symptoms()?;
        DemandForecaster::new(&requests, self.config.forecast_depth)?
            .symptom_series(today, start, end, &symptoms, &chart_symptoms)
    }

    /// Diagnosis requests, restricted to patients whose age today falls in the group
    fn requests_in_age_group(
        &self,
        today: NaiveDate,
        age_group: Option<&AgeGroup>,
    ) -> Result<Vec<DiagnosisRequest>> {
        let requests = self.source.diagnosis_requests()?;
        let Some(group) = age_group else {
            return Ok(requests);
        };

        let ages: FxHashMap<PatientId, u32> = self
            .source
            .patients()?
            .into_iter()
            .map(|patient| (patient.id, patient.age_at(today)))
            .collect();
        let chart_ages: FxHashMap<ChartId, u32> = self
            .source
            .charts()?
            .into_iter()
            .filter_map(|chart| ages.get(&chart.patient_id).map(|&age| (chart.id, age)))
            .collect();

        let selected: Vec<DiagnosisRequest> = requests
            .into_iter()
            .filter(|request| {
                chart_ages
                    .get(&request.chart_id)
                    .is_some_and(|&age| group.contains(age))
            })
            .collect();
        debug!("{} diagnosis requests in age group {group}", selected.len());
        Ok(selected)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
