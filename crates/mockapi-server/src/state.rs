//! Application state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mockapi_store::TemplateStore;

/// File name of the payment template inside the templates directory.
pub const PAYMENT_TEMPLATE_FILE: &str = "payment.json";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The persisted template table.
    templates: Arc<dyn TemplateStore>,
    /// Directory holding static file templates.
    templates_dir: Arc<PathBuf>,
    /// Whether the router mounts `/metrics`.
    metrics_endpoint: bool,
}

impl AppState {
    /// Creates a new AppState with the given template store and templates directory.
    pub fn new(templates: Arc<dyn TemplateStore>, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates,
            templates_dir: Arc::new(templates_dir.into()),
            metrics_endpoint: false,
        }
    }

    /// Marks the `/metrics` endpoint as mounted.
    pub(crate) fn with_metrics_endpoint(mut self) -> Self {
        self.metrics_endpoint = true;
        self
    }

    /// Returns true when `/metrics` is served next to the API routes.
    pub fn metrics_endpoint(&self) -> bool {
        self.metrics_endpoint
    }

    /// Returns a reference to the template store.
    pub fn templates(&self) -> &dyn TemplateStore {
        self.templates.as_ref()
    }

    /// Returns the templates directory.
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Returns the full path of the payment template.
    pub fn payment_template_path(&self) -> PathBuf {
        self.templates_dir.join(PAYMENT_TEMPLATE_FILE)
    }
}
