//! Error types for the template and cache stores.

/// Errors that can occur when working with the template store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No template is stored under the requested name.
    #[error("template not found: {0}")]
    NotFound(String),

    /// The underlying database returned an error.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred while preparing the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking worker running the query failed.
    #[error("store task failed: {0}")]
    Task(String),
}

impl StoreError {
    /// Creates a new task error.
    pub fn task(msg: impl Into<String>) -> Self {
        Self::Task(msg.into())
    }

    /// Returns true if this error indicates a missing template.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors raised by a cache store backend.
///
/// Callers treat every variant as a cache miss or a skipped write.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The Redis server rejected the command or could not be reached.
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A stored entry could not be decoded.
    #[error("corrupt cache entry for '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    /// The backend is not available.
    #[error("cache unavailable: {reason}")]
    Unavailable { reason: String },
}

impl CacheError {
    /// Creates a new corrupt entry error.
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
