//! Enumeration catalog cache.
//!
//! The catalog lives in the `enum_catalog` table so allowed codes can change
//! without a redeploy. Reading it on every request would put a query on the
//! hot path, so the loaded catalog is held behind an explicit TTL. Expiry and
//! fallback policy live here, injected via the constructor, not in ambient
//! module state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::warn;
use sqlx::{Row, SqlitePool};
use tokio::sync::RwLock;

use super::catalog::EnumCatalog;
use crate::error_handling::DatabaseError;

struct CachedCatalog {
    catalog: Arc<EnumCatalog>,
    loaded_at: Instant,
}

/// TTL'd cache in front of the stored enumeration catalog.
///
/// `get` serves the cached catalog while it is fresh, reloads from storage
/// when it expires, and falls back to the builtin catalog when storage is
/// unavailable or holds an incomplete catalog. A fallback result is not
/// cached past its TTL any differently; the next expiry retries storage.
pub struct CatalogCache {
    ttl: Duration,
    inner: RwLock<Option<CachedCatalog>>,
}

impl CatalogCache {
    /// Creates a cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        CatalogCache {
            ttl,
            inner: RwLock::new(None),
        }
    }

    /// Returns the current catalog, reloading from the pool if the cached
    /// copy has expired.
    pub async fn get(&self, pool: &SqlitePool) -> Arc<EnumCatalog> {
        {
            let guard = self.inner.read().await;
            if let Some(cached) = guard.as_ref() {
                if cached.loaded_at.elapsed() < self.ttl {
                    return Arc::clone(&cached.catalog);
                }
            }
        }

        let mut guard = self.inner.write().await;
        // Another task may have refreshed while we waited for the write lock.
        if let Some(cached) = guard.as_ref() {
            if cached.loaded_at.elapsed() < self.ttl {
                return Arc::clone(&cached.catalog);
            }
        }

        let catalog = match load_catalog(pool).await {
            Ok(catalog) if catalog.is_complete() => Arc::new(catalog),
            Ok(_) => {
                warn!("Stored enum catalog is incomplete; using builtin catalog");
                Arc::new(EnumCatalog::builtin())
            }
            Err(e) => {
                warn!("Failed to load enum catalog from storage: {e}; using builtin catalog");
                Arc::new(EnumCatalog::builtin())
            }
        };

        *guard = Some(CachedCatalog {
            catalog: Arc::clone(&catalog),
            loaded_at: Instant::now(),
        });
        catalog
    }

    /// Drops the cached catalog so the next `get` reloads immediately.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}

/// Loads the full catalog from the `enum_catalog` table.
async fn load_catalog(pool: &SqlitePool) -> Result<EnumCatalog, DatabaseError> {
    let rows = sqlx::query("SELECT enum_set, code FROM enum_catalog")
        .fetch_all(pool)
        .await?;

    let mut catalog = EnumCatalog::empty();
    for row in rows {
        let set_name: String = row.get("enum_set");
        let code: String = row.get("code");
        if !catalog.insert(&set_name, code) {
            warn!("Ignoring enum_catalog row with unknown set '{set_name}'");
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::seed_enum_catalog;
    use crate::storage::test_helpers::create_test_pool;

    #[tokio::test]
    async fn test_get_loads_seeded_catalog() {
        let pool = create_test_pool().await;
        seed_enum_catalog(&pool).await.unwrap();

        let cache = CatalogCache::new(Duration::from_secs(60));
        let catalog = cache.get(&pool).await;
        assert_eq!(*catalog, EnumCatalog::builtin());
    }

    #[tokio::test]
    async fn test_get_falls_back_to_builtin_when_table_empty() {
        let pool = create_test_pool().await;

        let cache = CatalogCache::new(Duration::from_secs(60));
        let catalog = cache.get(&pool).await;
        assert_eq!(*catalog, EnumCatalog::builtin());
    }

    #[tokio::test]
    async fn test_cached_copy_served_until_invalidated() {
        let pool = create_test_pool().await;
        seed_enum_catalog(&pool).await.unwrap();

        let cache = CatalogCache::new(Duration::from_secs(60));
        let _ = cache.get(&pool).await;

        // A code added after the first load is invisible until invalidation.
        sqlx::query("INSERT INTO enum_catalog (enum_set, code) VALUES ('tactics', 'NEW_TACTIC')")
            .execute(&pool)
            .await
            .unwrap();

        let cached = cache.get(&pool).await;
        assert!(!cached.tactics.contains("NEW_TACTIC"));

        cache.invalidate().await;
        let fresh = cache.get(&pool).await;
        assert!(fresh.tactics.contains("NEW_TACTIC"));
    }

    #[tokio::test]
    async fn test_zero_ttl_reloads_every_get() {
        let pool = create_test_pool().await;
        seed_enum_catalog(&pool).await.unwrap();

        let cache = CatalogCache::new(Duration::ZERO);
        let _ = cache.get(&pool).await;

        sqlx::query("INSERT INTO enum_catalog (enum_set, code) VALUES ('tactics', 'NEW_TACTIC')")
            .execute(&pool)
            .await
            .unwrap();

        let fresh = cache.get(&pool).await;
        assert!(fresh.tactics.contains("NEW_TACTIC"));
    }
}
