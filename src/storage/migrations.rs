//! Schema migrations.

use sqlx::{Pool, Sqlite};

/// Applies any pending migrations from the crate's `migrations/` directory.
///
/// Run at startup before the first report is accepted; the report and
/// coordinate tables and the enum catalog must exist before the pipeline or
/// the seeder touch them.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), anyhow::Error> {
    let migrations_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    sqlx::migrate::Migrator::new(migrations_dir.as_path())
        .await?
        .run(pool)
        .await?;
    Ok(())
}
