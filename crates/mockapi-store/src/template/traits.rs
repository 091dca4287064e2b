//! Template store trait definition.

use async_trait::async_trait;
use mockapi_core::Template;

use crate::error::StoreError;

/// A durable name → content table for response templates.
///
/// Implementations must give upsert-by-key semantics: writing an existing
/// name replaces its content, and the last write wins.
///
/// # Example
///
/// ```ignore
/// use mockapi_store::{SqliteTemplateStore, TemplateStore};
///
/// let store = SqliteTemplateStore::in_memory()?;
/// store.upsert(&Template::new("welcome", "{}")).await?;
/// let template = store.get("welcome").await?;
/// ```
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Inserts the template or replaces the content stored under its name.
    async fn upsert(&self, template: &Template) -> Result<(), StoreError>;

    /// Fetches a template by name.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if no template has that name
    /// - `StoreError::Database` if the table cannot be queried
    async fn get(&self, name: &str) -> Result<Template, StoreError>;

    /// Verifies that the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Returns the name of this store, for logging.
    fn name(&self) -> &str;
}
