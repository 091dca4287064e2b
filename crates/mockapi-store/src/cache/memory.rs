//! In-process cache store using Moka.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use super::{CacheStore, CachedResponse};
use crate::error::CacheError;

/// Maximo numero de entries por defecto.
pub const DEFAULT_MEMORY_CAPACITY: u64 = 10_000;

#[derive(Clone)]
struct TimedEntry {
    response: CachedResponse,
    ttl: Duration,
}

/// Expira cada entry segun el TTL con que fue escrita.
struct PerEntryTtl;

impl Expiry<String, TimedEntry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &TimedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &TimedEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Cache store kept in process memory.
///
/// Thread-safe y async-friendly. Used for local runs without Redis and as the
/// cache behind the integration tests.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use mockapi_store::{CacheStore, CachedResponse, MemoryCacheStore};
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = MemoryCacheStore::new(1_000);
/// cache
///     .set("/docs", CachedResponse::new(200, "{}"), Duration::from_secs(600))
///     .await
///     .unwrap();
///
/// if let Ok(Some(entry)) = cache.get("/docs").await {
///     println!("Cache hit: {} bytes", entry.body().len());
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct MemoryCacheStore {
    inner: Cache<String, TimedEntry>,
}

impl MemoryCacheStore {
    /// Crea un nuevo cache con la capacidad dada.
    pub fn new(max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { inner }
    }

    /// Retorna el numero aproximado de entries en cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Fuerza la limpieza de entries expiradas (para tests principalmente).
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY)
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, CacheError> {
        Ok(self.inner.get(key).await.map(|entry| entry.response))
    }

    async fn set(
        &self,
        key: &str,
        entry: CachedResponse,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        self.inner
            .insert(
                key.to_string(),
                TimedEntry {
                    response: entry,
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
