//! Mock API Core - Domain types
//!
//! This crate provides the foundational types for the mock API server:
//! persisted response templates, the ephemeral mock entities generated per
//! request, and the placeholder substitution applied to file templates.

pub mod mock;
pub mod render;
pub mod template;

pub use mock::{MockOrder, MockUser, OrderOutcome};
pub use render::{PaymentPlaceholders, render_placeholders};
pub use template::Template;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
