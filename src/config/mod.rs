//! Configuration module.
//!
//! Contains CLI/configuration types and application-wide constants.

pub mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
