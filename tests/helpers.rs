// Shared test helpers for database setup and service construction.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use raid_reports::{
    run_migrations, seed_enum_catalog, CatalogCache, RawReportPayload, ReportCreationService,
    ServiceStats,
};

/// Creates a migrated, seeded test database pool.
///
/// Uses an in-memory database capped at one connection; every new in-memory
/// SQLite connection would otherwise be a fresh empty database.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> Arc<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    seed_enum_catalog(&pool)
        .await
        .expect("Failed to seed enum catalog");
    Arc::new(pool)
}

/// Builds a report creation service over the given pool.
#[allow(dead_code)]
pub fn build_service(
    pool: Arc<SqlitePool>,
    jitter_radius_meters: f64,
    decoy_count: usize,
) -> (Arc<ReportCreationService>, Arc<ServiceStats>) {
    let stats = Arc::new(ServiceStats::new());
    let cache = Arc::new(CatalogCache::new(Duration::from_secs(300)));
    let service = ReportCreationService::new(
        pool,
        cache,
        Arc::clone(&stats),
        jitter_radius_meters,
        decoy_count,
    )
    .expect("test jitter parameters are valid");
    (Arc::new(service), stats)
}

/// A minimal valid submission: one coordinate, one tactic.
#[allow(dead_code)]
pub fn minimal_payload() -> RawReportPayload {
    serde_json::from_str(
        r#"{"coordinates": {"lat": 33.7490, "lng": -84.3880}, "tacticsUsed": ["SURVEILLANCE"]}"#,
    )
    .expect("minimal payload deserializes")
}
