//! Error handling module.
//!
//! Defines the error taxonomy surfaced by the service and the statistics
//! counters that track failures by category.

mod stats;
mod types;

pub use stats::ServiceStats;
pub use types::{DatabaseError, ErrorType, InitializationError, ReportError};
