//! Logging utilities
//!
//! This module provides standardized log lines for engine operations.

pub mod log;

pub use log::{log_operation_complete, log_operation_start, log_warning};
