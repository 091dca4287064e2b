//! Mock API Server binary.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use mockapi_server::{
    AppState, Settings, build_cache_layer, build_cache_store, create_router,
    create_router_with_metrics, metrics::init_metrics, run_server, with_cors,
};
use mockapi_store::SqliteTemplateStore;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("failed to load settings")?;
    settings
        .validate()
        .map_err(|reason| anyhow!("invalid settings: {}", reason))?;

    let addr = settings
        .server
        .socket_addr()
        .context("invalid server.host/server.port")?;

    tracing::info!("Starting Mock API Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", settings.storage.database_path.display());
    tracing::info!("Templates dir: {}", settings.storage.templates_dir.display());

    let templates = SqliteTemplateStore::open(&settings.storage.database_path).with_context(|| {
        format!(
            "failed to open template store at {}",
            settings.storage.database_path.display()
        )
    })?;

    let state = AppState::new(Arc::new(templates), settings.storage.templates_dir.clone());

    let cache_store = build_cache_store(&settings.cache, &settings.redis).await;
    let cache = build_cache_layer(&settings.cache, cache_store);
    tracing::info!(
        backend = cache.store_name(),
        path = cache.policy().path(),
        ttl_seconds = settings.cache.ttl_seconds,
        "Response cache configured"
    );

    let app = if settings.metrics.enabled {
        let handle = init_metrics().context("failed to install metrics recorder")?;
        create_router_with_metrics(state, cache, handle)
    } else {
        create_router(state, cache)
    };

    run_server(addr, with_cors(app, settings.server.cors)).await?;

    Ok(())
}
