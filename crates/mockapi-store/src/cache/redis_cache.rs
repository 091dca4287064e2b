//! Redis-backed cache store.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{CacheStore, CachedResponse, DEFAULT_CACHED_STATUS};
use crate::error::CacheError;

const STATUS_FIELD: &str = "status";
const BODY_FIELD: &str = "body";

/// Connection settings for the Redis cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    /// Logical database index.
    pub db: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            db: 0,
            password: None,
        }
    }
}

impl RedisConfig {
    /// Builds the `redis://` connection URL, percent-encoding the password.
    pub fn url(&self) -> String {
        match self.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => format!(
                "redis://:{}@{}:{}/{}",
                urlencoding::encode(password),
                self.host,
                self.port,
                self.db
            ),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }

    /// Connection URL safe for logs.
    pub fn redacted_url(&self) -> String {
        match self.password {
            Some(_) => format!("redis://:***@{}:{}/{}", self.host, self.port, self.db),
            None => self.url(),
        }
    }
}

/// Cache store backed by a Redis server.
///
/// Each entry is a hash holding the status and raw body, written together
/// with its expiry in one `MULTI` block so a reader never sees an entry
/// without a TTL.
#[derive(Clone)]
pub struct RedisCacheStore {
    conn: ConnectionManager,
}

impl RedisCacheStore {
    /// Connects to the server described by `config`.
    ///
    /// The connection manager reconnects on its own after transient failures;
    /// only the initial connection is established eagerly.
    pub async fn connect(config: &RedisConfig) -> Result<Self, CacheError> {
        let client = redis::Client::open(config.url())?;
        let conn = ConnectionManager::new(client).await?;

        info!(url = %config.redacted_url(), "Connected to Redis cache");

        Ok(Self { conn })
    }

    fn decode(
        key: &str,
        mut fields: HashMap<String, Vec<u8>>,
    ) -> Result<CachedResponse, CacheError> {
        let body = fields
            .remove(BODY_FIELD)
            .ok_or_else(|| CacheError::corrupt(key, "missing body field"))?;

        let status = match fields.remove(STATUS_FIELD) {
            Some(raw) => std::str::from_utf8(&raw)
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .ok_or_else(|| CacheError::corrupt(key, "invalid status field"))?,
            None => DEFAULT_CACHED_STATUS,
        };

        Ok(CachedResponse::new(status, body))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, CacheError> {
        let mut conn = self.conn.clone();
        let fields: HashMap<String, Vec<u8>> = conn.hgetall(key).await?;

        if fields.is_empty() {
            return Ok(None);
        }

        Self::decode(key, fields).map(Some)
    }

    async fn set(
        &self,
        key: &str,
        entry: CachedResponse,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1);

        debug!(
            key = %key,
            ttl_secs = seconds,
            bytes = entry.body().len(),
            "Writing cache entry"
        );

        let _: () = redis::pipe()
            .atomic()
            .cmd("DEL")
            .arg(key)
            .ignore()
            .cmd("HSET")
            .arg(key)
            .arg(STATUS_FIELD)
            .arg(entry.status())
            .arg(BODY_FIELD)
            .arg(entry.body().as_ref())
            .ignore()
            .cmd("EXPIRE")
            .arg(key)
            .arg(seconds)
            .ignore()
            .query_async(&mut conn)
            .await?;

        Ok(())
    }

    fn name(&self) -> &str {
        "redis"
    }
}
