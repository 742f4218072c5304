//! Services combining the record source with the prediction algorithms

pub mod prediction;

pub use prediction::PredictionService;
