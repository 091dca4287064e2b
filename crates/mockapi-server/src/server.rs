use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use mockapi_store::{CacheStore, MemoryCacheStore, NoopCacheStore, RedisCacheStore, RedisConfig};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    docs::docs,
    health::health_check,
    metrics::metrics_handler,
    mock::{mock_order, mock_payment, mock_user},
    root::root,
    template::{create_template, get_template},
};
use crate::middleware::{CachePolicy, LoggingLayer, RequestIdLayer, ResponseCacheLayer};
use crate::settings::{CacheBackend, CacheSettings};
use crate::state::AppState;

/// Builds the mock API routes with the given state.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/docs", get(docs))
        .route("/health", get(health_check))
        .route("/mock/user", get(mock_user))
        .route("/mock/order/{status}", get(mock_order))
        .route("/mock/payment", get(mock_payment))
        .route("/template", post(create_template))
        .route("/template/{name}", get(get_template))
        .with_state(state)
}

/// Wraps a router with the shared middleware stack.
///
/// Order, outermost first: request id, logging, HTTP metrics, response cache.
/// Cache hits are therefore still logged, counted and tagged with an id.
fn with_middleware(router: Router, cache: ResponseCacheLayer) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    router
        .layer(cache)
        .layer(middleware::from_fn(
            crate::metrics::http::http_metrics_middleware,
        ))
        .layer(middleware_stack)
}

/// Creates the application router without a `/metrics` endpoint.
pub fn create_router(state: AppState, cache: ResponseCacheLayer) -> Router {
    with_middleware(api_routes(state), cache)
}

/// Creates the application router including the Prometheus `/metrics` endpoint.
pub fn create_router_with_metrics(
    state: AppState,
    cache: ResponseCacheLayer,
    prometheus_handle: PrometheusHandle,
) -> Router {
    // Router for metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    let state = state.with_metrics_endpoint();
    with_middleware(api_routes(state).merge(metrics_router), cache)
}

/// Adds a permissive CORS layer when enabled.
pub fn with_cors(router: Router, enabled: bool) -> Router {
    if enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Builds the cache store selected by the settings.
///
/// An unreachable Redis is not fatal: the server starts with caching disabled.
pub async fn build_cache_store(
    settings: &CacheSettings,
    redis: &RedisConfig,
) -> Arc<dyn CacheStore> {
    match settings.backend {
        CacheBackend::Redis => match RedisCacheStore::connect(redis).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::warn!(
                    url = %redis.redacted_url(),
                    error = %e,
                    "Redis unavailable, response cache disabled"
                );
                Arc::new(NoopCacheStore)
            },
        },
        CacheBackend::Memory => Arc::new(MemoryCacheStore::new(settings.max_capacity)),
        CacheBackend::None => Arc::new(NoopCacheStore),
    }
}

/// Builds the cache layer for the given settings and store.
pub fn build_cache_layer(
    settings: &CacheSettings,
    store: Arc<dyn CacheStore>,
) -> ResponseCacheLayer {
    ResponseCacheLayer::new(store, CachePolicy::new(&settings.path, settings.ttl()))
}

/// Runs the server until a shutdown signal arrives.
pub async fn run_server(addr: SocketAddr, app: Router) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
