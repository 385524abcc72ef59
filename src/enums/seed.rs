//! Seeding the stored enumeration catalog.

use log::info;
use sqlx::SqlitePool;

use super::catalog::EnumCatalog;
use crate::error_handling::DatabaseError;

/// Writes the builtin enumeration catalog into the `enum_catalog` table.
///
/// Idempotent: existing rows are left alone, so codes added out-of-band (a
/// catalog version ahead of this binary) survive reseeding. Run at startup so
/// external collaborators can always read the allowed sets from storage.
pub async fn seed_enum_catalog(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let catalog = EnumCatalog::builtin();
    let mut inserted = 0u32;

    for (set_name, code) in catalog.entries() {
        let result =
            sqlx::query("INSERT OR IGNORE INTO enum_catalog (enum_set, code) VALUES (?, ?)")
                .bind(set_name)
                .bind(code)
                .execute(pool)
                .await?;
        inserted += result.rows_affected() as u32;
    }

    if inserted > 0 {
        info!("Seeded {inserted} enum catalog codes");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_helpers::create_test_pool;

    #[tokio::test]
    async fn test_seed_writes_all_codes() {
        let pool = create_test_pool().await;
        seed_enum_catalog(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM enum_catalog")
            .fetch_one(&pool)
            .await
            .unwrap();
        // 8 tactics + 7 categories + 12 detail locations + 3 outcomes
        // + 6 references + 4 sources.
        assert_eq!(count, 40);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = create_test_pool().await;
        seed_enum_catalog(&pool).await.unwrap();
        seed_enum_catalog(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM enum_catalog")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 40);
    }

    #[tokio::test]
    async fn test_seed_preserves_out_of_band_codes() {
        let pool = create_test_pool().await;
        sqlx::query("INSERT INTO enum_catalog (enum_set, code) VALUES ('tactics', 'NEW_TACTIC')")
            .execute(&pool)
            .await
            .unwrap();

        seed_enum_catalog(&pool).await.unwrap();

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM enum_catalog WHERE code = 'NEW_TACTIC'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 1);
    }
}
