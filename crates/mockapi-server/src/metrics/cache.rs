//! Response cache metrics recording.

use metrics::counter;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const CACHE_HITS_TOTAL: &str = "mockapi_cache_hits_total";
pub const CACHE_MISSES_TOTAL: &str = "mockapi_cache_misses_total";
pub const CACHE_ERRORS_TOTAL: &str = "mockapi_cache_errors_total";

/// Registra las metricas de cache.
/// Llamar una vez al inicio para registrar las metricas.
pub fn register_cache_metrics() {
    metrics::describe_counter!(CACHE_HITS_TOTAL, "Total number of response cache hits");
    metrics::describe_counter!(CACHE_MISSES_TOTAL, "Total number of response cache misses");
    metrics::describe_counter!(
        CACHE_ERRORS_TOTAL,
        "Total number of failed cache store operations"
    );
}

/// Recorder de metricas de cache.
/// Los contadores atomicos se comparten entre clones del middleware.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    errors: Arc<AtomicU64>,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un cache hit
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        counter!(CACHE_HITS_TOTAL).increment(1);
    }

    /// Registra un cache miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        counter!(CACHE_MISSES_TOTAL).increment(1);
    }

    /// Registra un fallo del cache store
    pub fn record_error(&self, operation: &'static str) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        counter!(CACHE_ERRORS_TOTAL, "operation" => operation).increment(1);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}
