use axum::Json;
use serde_json::{Value, json};

/// Handler for GET /.
pub async fn root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}
