//! Endpoint index served at `/docs`.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiIndex {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointDoc>,
}

const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "Static greeting"),
    ("GET", "/mock/user", "Random user with a fresh id"),
    (
        "GET",
        "/mock/order/{status}",
        "Order echoing the status label; success=200, failed=400, pending=202",
    ),
    (
        "GET",
        "/mock/payment",
        "Payment template with {{timestamp}} and {{uuid}} substituted",
    ),
    ("POST", "/template", "Create or overwrite a named template"),
    ("GET", "/template/{name}", "Raw content of a named template"),
    ("GET", "/docs", "This index"),
    ("GET", "/health", "Liveness and template store status"),
];

/// Solo se lista cuando el router lo monta.
const METRICS_ENDPOINT: (&str, &str, &str) = ("GET", "/metrics", "Prometheus metrics");

impl ApiIndex {
    /// Index of the mounted routes. `/metrics` is listed only when `with_metrics` is set.
    pub fn current(with_metrics: bool) -> Self {
        let metrics = with_metrics.then_some(&METRICS_ENDPOINT);

        Self {
            name: "mockapi-server",
            version: crate::version(),
            endpoints: ENDPOINTS
                .iter()
                .chain(metrics)
                .map(|&(method, path, description)| EndpointDoc {
                    method,
                    path,
                    description,
                })
                .collect(),
        }
    }
}

/// Handler for GET /docs.
pub async fn docs(State(state): State<AppState>) -> Json<ApiIndex> {
    Json(ApiIndex::current(state.metrics_endpoint()))
}
