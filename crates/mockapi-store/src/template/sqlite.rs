//! SQLite-backed template store.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use mockapi_core::Template;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use super::TemplateStore;
use crate::error::StoreError;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS mock_templates (
    name TEXT PRIMARY KEY,
    content TEXT
)";

const UPSERT: &str = "INSERT OR REPLACE INTO mock_templates (name, content) VALUES (?1, ?2)";

const SELECT_BY_NAME: &str = "SELECT content FROM mock_templates WHERE name = ?1";

/// Template store persisted in a single `mock_templates` table.
///
/// The connection is shared behind a mutex and every query runs on the
/// blocking thread pool.
#[derive(Clone)]
pub struct SqliteTemplateStore {
    conn: Arc<Mutex<Connection>>,
    location: String,
}

impl SqliteTemplateStore {
    /// Opens (or creates) the database file and ensures the table exists.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self::from_connection(conn, path.display().to_string())?;

        info!(path = %path.display(), "Template store opened");
        Ok(store)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?, ":memory:".to_string())
    }

    fn from_connection(conn: Connection, location: String) -> Result<Self, StoreError> {
        conn.execute(CREATE_TABLE, [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            location,
        })
    }

    /// Returns the database location (file path or `:memory:`).
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Runs a closure against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::task(format!("Template query task failed: {}", e)))?
    }
}

#[async_trait]
impl TemplateStore for SqliteTemplateStore {
    async fn upsert(&self, template: &Template) -> Result<(), StoreError> {
        let name = template.name().to_string();
        let content = template.content().to_string();

        debug!(name = %name, bytes = content.len(), "Upserting template");

        self.with_conn(move |conn| {
            conn.execute(UPSERT, params![name, content])?;
            Ok(())
        })
        .await
    }

    async fn get(&self, name: &str) -> Result<Template, StoreError> {
        let key = name.to_string();

        let content: Option<Option<String>> = self
            .with_conn(move |conn| {
                Ok(conn
                    .query_row(SELECT_BY_NAME, params![key], |row| row.get(0))
                    .optional()?)
            })
            .await?;

        match content {
            // NULL content se trata como template vacio
            Some(content) => Ok(Template::new(name, content.unwrap_or_default())),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
