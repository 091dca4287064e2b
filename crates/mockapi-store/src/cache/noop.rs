//! Cache store that never holds anything.

use std::time::Duration;

use async_trait::async_trait;

use super::{CacheStore, CachedResponse};
use crate::error::CacheError;

/// Always-miss, always-succeed store used when caching is disabled or the
/// configured backend could not be reached at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCacheStore;

#[async_trait]
impl CacheStore for NoopCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<CachedResponse>, CacheError> {
        Ok(None)
    }

    async fn set(
        &self,
        _key: &str,
        _entry: CachedResponse,
        _ttl: Duration,
    ) -> Result<(), CacheError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "none"
    }
}
