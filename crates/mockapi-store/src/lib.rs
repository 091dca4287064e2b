//! # Mock API Stores
//!
//! Storage collaborators for the mock API server.
//!
//! ## Features
//!
//! - Async trait-based template store with a SQLite implementation
//! - Async trait-based response cache store with Redis, in-memory and no-op
//!   implementations
//! - Per-entry TTL expiry owned by the cache backend
//!
//! ## Example
//!
//! ```ignore
//! use mockapi_store::{SqliteTemplateStore, TemplateStore, MemoryCacheStore, CacheStore};
//!
//! let templates = SqliteTemplateStore::open("db/mock.db")?;
//! templates.upsert(&Template::new("welcome", "{}")).await?;
//!
//! let cache = MemoryCacheStore::default();
//! cache.set("/docs", CachedResponse::new(200, "{}"), Duration::from_secs(600)).await?;
//! ```

pub mod cache;
pub mod error;
pub mod template;

// Re-exports
pub use cache::{
    CacheStore, CachedResponse, MemoryCacheStore, NoopCacheStore, RedisCacheStore, RedisConfig,
};
pub use error::{CacheError, StoreError};
pub use template::{SqliteTemplateStore, TemplateStore};

// Re-export mockapi_core for consumers
pub use mockapi_core;
