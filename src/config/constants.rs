//! Application-wide constants.

/// Default SQLite database path.
pub const DB_PATH: &str = "./raid_reports.db";

/// Default port for the report API server.
pub const DEFAULT_PORT: u16 = 8080;

/// Geohash precision in characters.
///
/// Matches the precision already baked into persisted documents. Changing it
/// silently shifts the boundaries of existing proximity range queries, so it
/// is fixed here rather than configurable.
pub const GEOHASH_PRECISION: usize = 10;

/// Default radius in meters of the disk decoy coordinates are scattered within.
pub const DEFAULT_JITTER_RADIUS_METERS: f64 = 100.0;

/// Upper bound on the jitter radius.
///
/// Incident reports never need planet-scale jitter; anything past a few
/// kilometers is a misconfiguration and is rejected, not clamped.
pub const MAX_JITTER_RADIUS_METERS: f64 = 5_000.0;

/// Default number of decoy coordinates stored per report.
pub const DEFAULT_DECOY_COUNT: usize = 3;

/// Length of generated report identifiers.
pub const REPORT_ID_LENGTH: usize = 20;

/// Default number of seconds the enumeration catalog is cached before it is
/// re-read from the database.
pub const DEFAULT_ENUM_CACHE_TTL_SECS: u64 = 300;
