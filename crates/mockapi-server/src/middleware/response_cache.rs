//! Read-through response cache for a single path.
//!
//! Eligible requests (GET on the configured path) are answered from the
//! [`CacheStore`] when an entry exists. On a miss the request goes downstream
//! and a 2xx response is buffered and stored with a fixed TTL. Everything else
//! passes through untouched.
//!
//! The cache never fails a request: store errors are logged and treated as a
//! miss (on read) or ignored (on write).

use std::{
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, Response, StatusCode, header},
    response::IntoResponse,
};
use mockapi_store::{CacheStore, CachedResponse};
use tower::{Layer, Service};
use tracing::{debug, error, warn};

use crate::metrics::CacheMetrics;

/// Path cached when none is configured.
pub const DEFAULT_CACHE_PATH: &str = "/docs";

/// TTL applied when none is configured (10 minutos).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Normalizes a configured path: leading `/`, no trailing `/`.
///
/// ```
/// use mockapi_server::middleware::normalize_path;
///
/// assert_eq!(normalize_path("docs/"), "/docs");
/// assert_eq!(normalize_path("/"), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Which requests are cached and for how long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    path: String,
    ttl: Duration,
}

impl CachePolicy {
    pub fn new(path: impl AsRef<str>, ttl: Duration) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            ttl,
        }
    }

    /// The normalized cacheable path.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Key under which the cacheable path is stored. The method is not part of it.
    pub fn cache_key(&self) -> &str {
        &self.path
    }

    /// Returns true for GET requests on exactly the cacheable path.
    ///
    /// The request path is compared as received: `/docs/` is a different
    /// route and never shares the `/docs` entry.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        method == Method::GET && path == self.path
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_PATH, DEFAULT_CACHE_TTL)
    }
}

/// Layer that puts a read-through cache in front of the inner service.
#[derive(Clone)]
pub struct ResponseCacheLayer {
    store: Arc<dyn CacheStore>,
    policy: Arc<CachePolicy>,
    metrics: CacheMetrics,
}

impl ResponseCacheLayer {
    pub fn new(store: Arc<dyn CacheStore>, policy: CachePolicy) -> Self {
        Self {
            store,
            policy: Arc::new(policy),
            metrics: CacheMetrics::new(),
        }
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Hit/miss/error counters shared by every service this layer builds.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Name of the backing cache store.
    pub fn store_name(&self) -> &str {
        self.store.name()
    }
}

impl<S> Layer<S> for ResponseCacheLayer {
    type Service = ResponseCacheMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ResponseCacheMiddleware {
            inner,
            store: Arc::clone(&self.store),
            policy: Arc::clone(&self.policy),
            metrics: self.metrics.clone(),
        }
    }
}

/// Middleware produced by [`ResponseCacheLayer`].
#[derive(Clone)]
pub struct ResponseCacheMiddleware<S> {
    inner: S,
    store: Arc<dyn CacheStore>,
    policy: Arc<CachePolicy>,
    metrics: CacheMetrics,
}

impl<S> Service<Request<Body>> for ResponseCacheMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        if !self
            .policy
            .matches(request.method(), request.uri().path())
        {
            return Box::pin(async move { inner.call(request).await });
        }

        let store = Arc::clone(&self.store);
        let policy = Arc::clone(&self.policy);
        let metrics = self.metrics.clone();

        Box::pin(async move {
            let key = policy.cache_key();

            match store.get(key).await {
                Ok(Some(entry)) => {
                    metrics.record_hit();
                    debug!(key, store = store.name(), "Response cache hit");
                    return Ok(replay(entry));
                },
                Ok(None) => {
                    metrics.record_miss();
                    debug!(key, store = store.name(), "Response cache miss");
                },
                Err(e) => {
                    metrics.record_error("get");
                    metrics.record_miss();
                    warn!(key, store = store.name(), error = %e, "Cache lookup failed, serving uncached");
                },
            }

            let response = inner.call(request).await?;

            if !response.status().is_success() {
                return Ok(response);
            }

            let (parts, body) = response.into_parts();
            let bytes = match axum::body::to_bytes(body, usize::MAX).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    error!(key, error = %e, "Failed to buffer response body");
                    return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
                },
            };

            let entry = CachedResponse::new(parts.status.as_u16(), bytes.clone());
            if let Err(e) = store.set(key, entry, policy.ttl()).await {
                metrics.record_error("set");
                warn!(key, store = store.name(), error = %e, "Cache write failed");
            }

            Ok(Response::from_parts(parts, Body::from(bytes)))
        })
    }
}

/// Builds the response served on a hit.
fn replay(entry: CachedResponse) -> Response<Body> {
    // Solo se guardan respuestas 2xx; cualquier otro valor se sirve como 200
    let status = StatusCode::from_u16(entry.status())
        .ok()
        .filter(StatusCode::is_success)
        .unwrap_or(StatusCode::OK);

    let mut response = Response::new(Body::from(entry.into_body()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
