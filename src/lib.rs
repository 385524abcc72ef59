//! raid_reports library: location-anonymizing raid report intake
//!
//! This library accepts community raid reports, validates them against closed
//! enumerations, replaces the submitted location with jittered decoy
//! coordinates, geohashes the decoys, and persists the result in SQLite. The
//! submitted true coordinate is never stored.
//!
//! # Example
//!
//! ```no_run
//! use raid_reports::{Config, run_server};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     jitter_radius_meters: 100.0,
//!     decoy_count: 3,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod enums;
mod error_handling;
pub mod geo;
pub mod initialization;
mod report;
mod server;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use enums::{seed_enum_catalog, CatalogCache, EnumCatalog};
pub use error_handling::{ReportError, ServiceStats};
pub use report::{RawReportPayload, ReportCreationService};
pub use run::run_server;
pub use server::{start_server, AppState};
pub use storage::{init_db_pool_with_path, run_migrations};

// Internal run module (wires the service together and serves it)
mod run {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::enums::{seed_enum_catalog, CatalogCache};
    use crate::error_handling::ServiceStats;
    use crate::report::ReportCreationService;
    use crate::server::{start_server, AppState};
    use crate::storage::{init_db_pool_with_path, run_migrations};

    /// Runs the report intake server with the provided configuration.
    ///
    /// Initializes the database (creating the file and running migrations if
    /// needed), seeds the enumeration catalog, builds the report creation
    /// service, and serves the HTTP API until the process is stopped.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The database cannot be created or migrated
    /// - The jitter parameters in `config` are invalid
    /// - The listen port cannot be bound
    pub async fn run_server(config: Config) -> Result<()> {
        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database pool")?;

        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        seed_enum_catalog(&pool)
            .await
            .context("Failed to seed enumeration catalog")?;

        let stats = Arc::new(ServiceStats::new());
        let catalog_cache = Arc::new(CatalogCache::new(Duration::from_secs(
            config.enum_cache_ttl_secs,
        )));

        let service = ReportCreationService::new(
            Arc::clone(&pool),
            catalog_cache,
            Arc::clone(&stats),
            config.jitter_radius_meters,
            config.decoy_count,
        )
        .context("Invalid jitter configuration")?;

        let state = AppState {
            service: Arc::new(service),
            stats,
            start_time: Arc::new(Instant::now()),
        };

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
            .await
            .with_context(|| format!("Failed to bind port {}", config.port))?;

        info!(
            "Accepting reports (jitter radius {}m, {} decoys per report)",
            config.jitter_radius_meters, config.decoy_count
        );

        start_server(listener, state).await
    }
}
