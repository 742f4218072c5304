//! Demand forecasts over diagnosis-request history

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use rustc_hash::FxHashMap;

use super::buckets::{DemandBucket, buckets, weight_denominator, weighted_average};
use crate::algorithm::parser::extract_diseases;
use crate::config::MAX_FORECAST_DEPTH;
use crate::error::{PredictionError, Result};
use crate::models::{ChartId, ChartSymptom, DiagnosisRequest, Disease, DiseaseId, Doctor, DoctorId, SymptomId};

/// Weighted forecasts over a fixed set of diagnosis requests
#[derive(Debug, Clone, Copy)]
pub struct DemandForecaster<'a> {
    requests: &'a [DiagnosisRequest],
    depth: usize,
}

impl<'a> DemandForecaster<'a> {
    /// Forecaster looking back over `depth` buckets
    pub fn new(requests: &'a [DiagnosisRequest], depth: usize) -> Result<Self> {
        if depth == 0 || depth > MAX_FORECAST_DEPTH {
            return Err(PredictionError::Config(format!(
                "forecast depth must lie in 1..={MAX_FORECAST_DEPTH}, got {depth}"
            )));
        }
        Ok(Self { requests, depth })
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Requests whose local creation day falls inside the bucket
    pub fn requests_in<'b>(
        &'b self,
        bucket: &'b DemandBucket,
    ) -> impl Iterator<Item = &'a DiagnosisRequest> + 'b {
        self.requests
            .iter()
            .filter(move |request| bucket.contains(request.creation_day()))
    }

    /// Weighted average of a per-bucket measure
    fn weighted<F>(&self, today: NaiveDate, day_interval: i64, mut measure: F) -> Result<f64>
    where
        F: FnMut(&DemandBucket) -> usize,
    {
        let counts: Vec<usize> = buckets(today, day_interval, self.depth)?
            .iter()
            .map(&mut measure)
            .collect();
        Ok(weighted_average(&counts, self.depth))
    }

    /// Expected number of requests in the next `day_interval` days
    pub fn forecast_request_volume(&self, today: NaiveDate, day_interval: i64) -> Result<f64> {
        let forecast = self.weighted(today, day_interval, |bucket| self.requests_in(bucket).count())?;
        debug!("Request volume forecast for {day_interval} days from {today}: {forecast}");
        Ok(forecast)
    }

    /// Weighted average request count per doctor
    ///
    /// Every listed doctor appears, with `0.0` when they had no requests.
    /// Requests for doctors not listed are ignored.
    pub fn doctor_demand(
        &self,
        today: NaiveDate,
        day_interval: i64,
        doctors: &[Doctor],
    ) -> Result<BTreeMap<DoctorId, f64>> {
        let mut weighted: BTreeMap<DoctorId, usize> =
            doctors.iter().map(|doctor| (doctor.id, 0)).collect();

        for bucket in buckets(today, day_interval, self.depth)? {
            for request in self.requests_in(&bucket) {
                if let Some(total) = weighted.get_mut(&request.doctor_id) {
                    *total += bucket.weight;
                }
            }
        }

        let denominator = weight_denominator(self.depth) as f64;
        Ok(weighted
            .into_iter()
            .map(|(id, total)| (id, total as f64 / denominator))
            .collect())
    }

    /// The doctor with the highest weighted demand
    ///
    /// Equal demand goes to the lowest doctor id. `None` when no doctors are
    /// given.
    pub fn most_wanted_doctor<'d>(
        &self,
        today: NaiveDate,
        day_interval: i64,
        doctors: &'d [Doctor],
    ) -> Result<Option<&'d Doctor>> {
        let demand = self.doctor_demand(today, day_interval, doctors)?;

        let mut best: Option<(DoctorId, f64)> = None;
        for (&id, &score) in &demand {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((id, score));
            }
        }

        Ok(best.and_then(|(id, score)| {
            debug!("Most wanted doctor {id} with weighted demand {score}");
            doctors.iter().find(|doctor| doctor.id == id)
        }))
    }

    /// Weighted count of requests diagnosing the given disease
    ///
    /// A request with a resolved disease counts when the ids match. Otherwise
    /// its narrative is searched for catalog disease names.
    pub fn disease_count_forecast(
        &self,
        today: NaiveDate,
        day_interval: i64,
        disease_id: DiseaseId,
        catalog: &[Disease],
    ) -> Result<f64> {
        self.weighted(today, day_interval, |bucket| {
            self.requests_in(bucket)
                .filter(|request| diagnoses(request, disease_id, catalog))
                .count()
        })
    }

    /// Weighted count of chart-symptom links among charts of in-bucket requests
    pub fn symptom_count_forecast(
        &self,
        today: NaiveDate,
        day_interval: i64,
        symptom_id: SymptomId,
        chart_symptoms: &[ChartSymptom],
    ) -> Result<f64> {
        let links = link_counts(chart_symptoms);
        self.weighted(today, day_interval, |bucket| {
            self.requests_in(bucket)
                .map(|request| {
                    links
                        .get(&(request.chart_id, symptom_id))
                        .copied()
                        .unwrap_or(0)
                })
                .sum()
        })
    }
}

fn diagnoses(request: &DiagnosisRequest, disease_id: DiseaseId, catalog: &[Disease]) -> bool {
    match request.disease_id {
        Some(id) => id == disease_id,
        None if request.has_narrative() => extract_diseases(&request.diagnosis, catalog)
            .iter()
            .any(|disease| disease.id == disease_id),
        None => false,
    }
}

fn link_counts(chart_symptoms: &[ChartSymptom]) -> FxHashMap<(ChartId, SymptomId), usize> {
    let mut counts = FxHashMap::default();
    for link in chart_symptoms {
        *counts.entry((link.chart_id, link.symptom_id)).or_insert(0) += 1;
    }
    counts
}
