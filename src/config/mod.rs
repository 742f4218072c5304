//! Configuration for the prediction engine.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, Result};
use crate::error::util::read_json;

/// Maximum accepted height of a patient (cm)
pub const MAX_HEIGHT: f64 = 250.0;

/// Maximum accepted weight of a patient (kg)
pub const MAX_WEIGHT: f64 = 150.0;

/// Birth-date difference (days) that normalises to 1.0, roughly 50 years
pub const MAX_DATE_DIFF: i64 = 18250;

/// Number of neighbours consulted by the classifier
pub const DEFAULT_NEIGHBOURS: usize = 1;

/// Number of historical buckets used by the demand forecasts
pub const MAX_DEEP_OF_PREDICTIONS: usize = 5;

/// Upper bound on the number of forecast buckets, ten years of weekly buckets
pub const MAX_FORECAST_DEPTH: usize = 520;

/// What the feature builder does with a symptom value missing from the severity dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSymptomValue {
    /// Encode the symptom as not reported (severity 0.0) and log a warning
    #[default]
    Absent,
    /// Fail with an `UnknownCategory` error
    Reject,
}

/// Configuration for the prediction engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Neighbours consulted per classification (k)
    pub neighbours: usize,
    /// Number of historical buckets behind each forecast
    pub forecast_depth: usize,
    /// Height normalisation constant (cm)
    pub max_height: f64,
    /// Weight normalisation constant (kg)
    pub max_weight: f64,
    /// Birth-date normalisation constant (days)
    pub max_date_diff_days: i64,
    /// Handling of symptom values outside the severity dictionary
    pub unknown_symptom_value: UnknownSymptomValue,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            neighbours: DEFAULT_NEIGHBOURS,
            forecast_depth: MAX_DEEP_OF_PREDICTIONS,
            max_height: MAX_HEIGHT,
            max_weight: MAX_WEIGHT,
            max_date_diff_days: MAX_DATE_DIFF,
            unknown_symptom_value: UnknownSymptomValue::Absent,
        }
    }
}

impl PredictionConfig {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> PredictionConfigBuilder {
        PredictionConfigBuilder::new()
    }

    /// Load a configuration document, filling unspecified fields with defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config: Self = read_json(path, "prediction configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.neighbours == 0 {
            return Err(PredictionError::Config(
                "neighbours must be at least 1".to_string(),
            ));
        }
        if self.forecast_depth == 0 || self.forecast_depth > MAX_FORECAST_DEPTH {
            return Err(PredictionError::Config(format!(
                "forecast_depth must lie in 1..={MAX_FORECAST_DEPTH}, got {}",
                self.forecast_depth
            )));
        }
        if !(self.max_height > 0.0) || !(self.max_weight > 0.0) {
            return Err(PredictionError::Config(
                "max_height and max_weight must be positive".to_string(),
            ));
        }
        if self.max_date_diff_days <= 0 {
            return Err(PredictionError::Config(
                "max_date_diff_days must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PredictionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction Configuration:")?;
        writeln!(f, "  Neighbours (k): {}", self.neighbours)?;
        writeln!(f, "  Forecast Depth: {}", self.forecast_depth)?;
        writeln!(f, "  Max Height: {} cm", self.max_height)?;
        writeln!(f, "  Max Weight: {} kg", self.max_weight)?;
        writeln!(f, "  Max Date Difference: {} days", self.max_date_diff_days)?;
        writeln!(f, "  Unknown Symptom Value: {:?}", self.unknown_symptom_value)
    }
}

/// Builder for constructing a [`PredictionConfig`]
#[derive(Debug, Clone, Default)]
pub struct PredictionConfigBuilder {
    config: PredictionConfig,
}

impl PredictionConfigBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of neighbours
    #[must_use]
    pub const fn neighbours(mut self, k: usize) -> Self {
        self.config.neighbours = k;
        self
    }

    /// Set the number of forecast buckets
    #[must_use]
    pub const fn forecast_depth(mut self, depth: usize) -> Self {
        self.config.forecast_depth = depth;
        self
    }

    /// Set the height normalisation constant
    #[must_use]
    pub const fn max_height(mut self, max_height: f64) -> Self {
        self.config.max_height = max_height;
        self
    }

    /// Set the weight normalisation constant
    #[must_use]
    pub const fn max_weight(mut self, max_weight: f64) -> Self {
        self.config.max_weight = max_weight;
        self
    }

    /// Set the birth-date normalisation constant
    #[must_use]
    pub const fn max_date_diff_days(mut self, days: i64) -> Self {
        self.config.max_date_diff_days = days;
        self
    }

    /// Set the unknown symptom value policy
    #[must_use]
    pub const fn unknown_symptom_value(mut self, policy: UnknownSymptomValue) -> Self {
        self.config.unknown_symptom_value = policy;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<PredictionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
