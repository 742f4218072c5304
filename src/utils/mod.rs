//! Utility modules
//!
//! - [`logging`]: standard log lines for engine operations
//! - [`test`]: fixtures and helpers shared by unit and integration tests

pub mod logging;
pub mod test;
