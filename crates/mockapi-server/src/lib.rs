//! # Mock API Server
//!
//! Axum-based HTTP server returning canned and templated responses.
//!
//! - Mock entity endpoints (`/mock/user`, `/mock/order/{status}`, `/mock/payment`)
//! - Named templates persisted in a [`TemplateStore`](mockapi_store::TemplateStore)
//! - A read-through response cache in front of one configured path
//!   ([`ResponseCacheLayer`])
//! - Request ids, structured logging and Prometheus metrics

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod settings;
pub mod state;

pub use error::{AppError, ErrorResponse};
pub use handlers::health::HealthResponse;
pub use middleware::{CachePolicy, ResponseCacheLayer};
pub use server::{
    build_cache_layer, build_cache_store, create_router, create_router_with_metrics, run_server,
    with_cors,
};
pub use settings::Settings;
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }
}
