//! Logging utilities
//!
//! Standard log lines for engine operations such as dataset builds,
//! classification runs and forecasts.

use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation runs over
pub fn log_operation_start(operation: &str, subject: &str) {
    log::info!("{operation} {subject}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation, in past tense
/// * `subject` - What the operation ran over
/// * `items` - Number of items produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, subject: &str, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items from {subject} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items from {subject}");
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `context` - Optional record or parameter the warning concerns
pub fn log_warning(message: &str, context: Option<&str>) {
    if let Some(context) = context {
        log::warn!("{message}: {context}");
    } else {
        log::warn!("{message}");
    }
}
