//! Response cache stores.
//!
//! This module provides the expiring key-value stores behind the response
//! cache middleware:
//! - [`RedisCacheStore`] - shared Redis backend
//! - [`MemoryCacheStore`] - in-process Moka backend
//! - [`NoopCacheStore`] - caching disabled

mod memory;
mod noop;
mod redis_cache;
mod traits;

pub use memory::{DEFAULT_MEMORY_CAPACITY, MemoryCacheStore};
pub use noop::NoopCacheStore;
pub use redis_cache::{RedisCacheStore, RedisConfig};
pub use traits::{CacheStore, CachedResponse, DEFAULT_CACHED_STATUS};
