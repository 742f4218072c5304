//! Prediction and forecasting algorithms
//!
//! - [`features`]: dictionaries and feature vector encoding
//! - [`parser`]: symptom alignment and disease extraction
//! - [`metric`]: distances between feature vectors
//! - [`knn`]: nearest-neighbour classification and quality measures
//! - [`forecast`]: time-decayed demand forecasts

pub mod features;
pub mod forecast;
pub mod knn;
pub mod metric;
pub mod parser;
