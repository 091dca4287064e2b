//! Test helpers para mockapi-server.

#![allow(dead_code, unused_imports)]

pub mod app;
pub mod client;

pub use app::{TestApp, client, client_with_metrics, short_ttl_policy, write_file};
pub use client::{TestClient, TestResponse};
