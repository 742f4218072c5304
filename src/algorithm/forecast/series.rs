//! Per-label forecast series over an interval grid
//!
//! Each point `i` of a series is a weighted forecast whose bucket width runs from
//! the anchor day to the end of interval `i` of the grid. Points whose window
//! ends on or before the anchor day have no history and are `0.0`.

use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use super::demand::DemandForecaster;
use super::intervals::{interval_dates, interval_lengths, round_two_decimals};
use crate::error::Result;
use crate::models::{ChartSymptom, Disease, Symptom};

/// Forecast values per label and interval, rounded to two decimals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    /// Label names, one per row of `values`
    pub labels: Vec<String>,
    /// Interval boundaries of the grid
    pub dates: Vec<NaiveDate>,
    /// `values[label][interval]`
    pub values: Vec<Vec<f64>>,
}

impl ForecastSeries {
    /// Series of one label, if present
    #[must_use]
    pub fn values_for(&self, label: &str) -> Option<&[f64]> {
        self.labels
            .iter()
            .position(|name| name == label)
            .map(|row| self.values[row].as_slice())
    }
}

/// Bucket width in days for each point of the grid over `start..=end`
#[must_use]
pub fn series_horizons(today: NaiveDate, start: NaiveDate, end: NaiveDate) -> Vec<i64> {
    let offset = (start - today).num_days();
    interval_lengths(start, end)
        .into_iter()
        .scan(offset, |horizon, length| {
            *horizon += length;
            Some(*horizon)
        })
        .collect()
}

fn series_row<F>(horizons: &[i64], mut forecast: F) -> Result<Vec<f64>>
where
    F: FnMut(i64) -> Result<f64>,
{
    horizons
        .iter()
        .map(|&horizon| {
            if horizon <= 0 {
                Ok(0.0)
            } else {
                forecast(horizon).map(round_two_decimals)
            }
        })
        .collect()
}

impl DemandForecaster<'_> {
    /// Disease count forecasts for every catalog disease across the grid
    pub fn disease_series(
        &self,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        catalog: &[Disease],
    ) -> Result<ForecastSeries> {
        let horizons = series_horizons(today, start, end);
        let mut values = Vec::with_capacity(catalog.len());
        for disease in catalog {
            info!("Forecasting disease '{}' (#{})", disease.name, disease.id);
            values.push(series_row(&horizons, |horizon| {
                self.disease_count_forecast(today, horizon, disease.id, catalog)
            })?);
        }

        Ok(ForecastSeries {
            labels: catalog.iter().map(|disease| disease.name.clone()).collect(),
            dates: interval_dates(start, end),
            values,
        })
    }

    /// Symptom count forecasts for every catalog symptom across the grid
    pub fn symptom_series(
        &self,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        catalog: &[Symptom],
        chart_symptoms: &[ChartSymptom],
    ) -> Result<ForecastSeries> {
        let horizons = series_horizons(today, start, end);
        let mut values = Vec::with_capacity(catalog.len());
        for symptom in catalog {
            info!("Forecasting symptom '{}' (#{})", symptom.name, symptom.id);
            values.push(series_row(&horizons, |horizon| {
                self.symptom_count_forecast(today, horizon, symptom.id, chart_symptoms)
            })?);
        }

        Ok(ForecastSeries {
            labels: catalog.iter().map(|symptom| symptom.name.clone()).collect(),
            dates: interval_dates(start, end),
            values,
        })
    }
}
