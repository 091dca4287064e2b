//! Test application builders.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;
use mockapi_server::{
    AppState, CachePolicy, ResponseCacheLayer, create_router, create_router_with_metrics,
};
use mockapi_store::{
    CacheStore, MemoryCacheStore, NoopCacheStore, SqliteTemplateStore, TemplateStore,
};
use tempfile::TempDir;

use super::client::TestClient;

/// A router over in-memory stores plus handles to inspect them.
pub struct TestApp {
    pub client: TestClient,
    pub cache: ResponseCacheLayer,
    /// Holds `payment.json` when a test writes one. Dropped with the app.
    pub templates_dir: TempDir,
}

impl TestApp {
    /// In-memory SQLite, in-memory cache with the default policy.
    pub fn new() -> Self {
        Self::with_cache(
            Arc::new(MemoryCacheStore::default()),
            CachePolicy::default(),
        )
    }

    pub fn with_cache(store: Arc<dyn CacheStore>, policy: CachePolicy) -> Self {
        let templates = SqliteTemplateStore::in_memory().expect("in-memory sqlite");
        Self::build(Arc::new(templates), store, policy)
    }

    pub fn with_template_store(templates: Arc<dyn TemplateStore>) -> Self {
        Self::build(templates, Arc::new(NoopCacheStore), CachePolicy::default())
    }

    fn build(
        templates: Arc<dyn TemplateStore>,
        store: Arc<dyn CacheStore>,
        policy: CachePolicy,
    ) -> Self {
        let templates_dir = tempfile::tempdir().expect("tempdir");
        let state = AppState::new(templates, templates_dir.path());
        let cache = ResponseCacheLayer::new(store, policy);

        Self {
            client: TestClient::new(create_router(state, cache.clone())),
            cache,
            templates_dir,
        }
    }

    /// Writes the payment template file.
    pub fn write_payment_template(&self, content: &str) {
        write_file(&self.templates_dir.path().join("payment.json"), content);
    }
}

pub fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content).expect("write template file");
}

/// Crea un TestClient con el router por defecto.
pub fn client() -> TestClient {
    TestClient::new(create_router(
        AppState::new(
            Arc::new(SqliteTemplateStore::in_memory().expect("in-memory sqlite")),
            "/nonexistent/templates",
        ),
        ResponseCacheLayer::new(Arc::new(NoopCacheStore), CachePolicy::default()),
    ))
}

/// Like [`client`], with `/metrics` mounted over a local recorder.
pub fn client_with_metrics() -> TestClient {
    let handle = PrometheusBuilder::new().build_recorder().handle();

    TestClient::new(create_router_with_metrics(
        AppState::new(
            Arc::new(SqliteTemplateStore::in_memory().expect("in-memory sqlite")),
            "/nonexistent/templates",
        ),
        ResponseCacheLayer::new(Arc::new(NoopCacheStore), CachePolicy::default()),
        handle,
    ))
}

/// Policy for a short-lived cache entry on `/docs`.
pub fn short_ttl_policy(ttl: Duration) -> CachePolicy {
    CachePolicy::new("/docs", ttl)
}
