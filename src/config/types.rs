//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DB_PATH, DEFAULT_DECOY_COUNT, DEFAULT_ENUM_CACHE_TTL_SECS, DEFAULT_JITTER_RADIUS_METERS,
    DEFAULT_PORT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration, parsed from the command line.
///
/// Every knob has a sensible default, so `raid_reports` with no arguments
/// starts a server on the default port against the default database file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "raid_reports",
    version,
    about = "Accepts raid reports, anonymizes their locations with jittered decoy coordinates, and stores them in SQLite."
)]
pub struct Config {
    /// SQLite database path
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Port the report API listens on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Radius in meters of the disk decoy coordinates are scattered within
    #[arg(long, default_value_t = DEFAULT_JITTER_RADIUS_METERS)]
    pub jitter_radius_meters: f64,

    /// Number of decoy coordinates stored per report
    #[arg(long, default_value_t = DEFAULT_DECOY_COUNT)]
    pub decoy_count: usize,

    /// Seconds the enumeration catalog is cached before re-reading it
    #[arg(long, default_value_t = DEFAULT_ENUM_CACHE_TTL_SECS)]
    pub enum_cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            jitter_radius_meters: DEFAULT_JITTER_RADIUS_METERS,
            decoy_count: DEFAULT_DECOY_COUNT,
            enum_cache_ttl_secs: DEFAULT_ENUM_CACHE_TTL_SECS,
        }
    }
}
