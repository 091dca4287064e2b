//! Template store abstraction.
//!
//! This module defines the template store trait and its SQLite implementation.

mod sqlite;
mod traits;

pub use sqlite::SqliteTemplateStore;
pub use traits::TemplateStore;
