//! A Rust library for predicting patient diseases with nearest-neighbour
//! classification and forecasting diagnosis-request demand from clinic records.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{PredictionConfig, PredictionConfigBuilder, UnknownSymptomValue};
pub use error::{PredictionError, Result};
pub use models::{
    Chart, ChartSymptom, DiagnosisRequest, Disease, Doctor, Patient, Recognition, Symptom,
};

// Feature encoding and classification
pub use algorithm::features::{
    Dictionaries, DiseaseVector, FeatureVector, FeatureVectorBuilder, SymptomOrdering,
};
pub use algorithm::knn::{ClassificationResult, KnnClassifier};
pub use algorithm::metric::{EuclideanMetric, Metric};
pub use algorithm::parser::{AlignedSymptoms, SymptomAligner, extract_diseases};

// Forecasting
pub use algorithm::forecast::{AgeGroup, DemandBucket, DemandForecaster, ForecastSeries};

// Record access and services
pub use repository::{RecordSnapshot, RecordSource};
pub use service::PredictionService;
