//! Cache store trait and the cached entry type.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::CacheError;

/// Status recorded for entries that predate status tracking.
pub const DEFAULT_CACHED_STATUS: u16 = 200;

/// A buffered response body plus the status it was produced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    status: u16,
    body: Bytes,
}

impl CachedResponse {
    /// Creates a cached entry.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the original status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the entry and returns the raw body.
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

/// An expiring key → response store used as a read-through cache.
///
/// Expiry is owned by the store: an entry written with `ttl` must be
/// reported as absent once `ttl` has elapsed.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Looks up an entry. `Ok(None)` is a miss.
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, CacheError>;

    /// Stores an entry that expires after `ttl`, replacing any previous one.
    async fn set(&self, key: &str, entry: CachedResponse, ttl: Duration)
    -> Result<(), CacheError>;

    /// Returns the name of this backend, for logging.
    fn name(&self) -> &str;
}
