//! Route handlers.

pub mod docs;
pub mod health;
pub mod metrics;
pub mod mock;
pub mod root;
pub mod template;
