//! Middleware stack para el servidor HTTP.
//!
//! Tower middleware applied around the route handlers:
//! - `RequestIdLayer`: genera/propaga X-Request-Id
//! - `LoggingLayer`: logging estructurado de requests
//! - `ResponseCacheLayer`: read-through cache for the cacheable path

mod logging;
mod request_id;
mod response_cache;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware, request_id_of};
pub use response_cache::{
    CachePolicy, DEFAULT_CACHE_PATH, DEFAULT_CACHE_TTL, ResponseCacheLayer,
    ResponseCacheMiddleware, normalize_path,
};
