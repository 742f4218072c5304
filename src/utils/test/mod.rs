//! Test utilities
//!
//! Fixtures and helpers shared by unit and integration tests.

pub mod helpers;

// Re-export commonly used functions for convenience
pub use fixtures::{
    date, datetime, fixture_today, sample_diseases, sample_doctors, sample_patients,
    sample_snapshot, sample_symptoms,
};
pub use helpers::{timed_execution, write_temp_json};
