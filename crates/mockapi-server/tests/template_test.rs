//! Tests de los endpoints de templates.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use helpers::TestApp;
use mockapi_core::Template;
use mockapi_store::{StoreError, TemplateStore};
use serde_json::{Value, json};

/// Template store whose every operation fails.
struct BrokenTemplateStore;

#[async_trait]
impl TemplateStore for BrokenTemplateStore {
    async fn upsert(&self, _template: &Template) -> Result<(), StoreError> {
        Err(StoreError::task("database is locked"))
    }

    async fn get(&self, _name: &str) -> Result<Template, StoreError> {
        Err(StoreError::task("database is locked"))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::task("database is locked"))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

// === Create / Get ===

#[tokio::test]
async fn create_then_get_returns_content() {
    let app = TestApp::new();

    let created = app
        .client
        .post_json(
            "/template",
            &json!({"name": "welcome", "content": "{\"msg\": \"hi\"}"}),
        )
        .await;

    created.assert_status(StatusCode::OK);
    assert_eq!(
        created.json::<Value>(),
        json!({"message": "Template created"})
    );

    let fetched = app.client.get("/template/welcome").await;
    fetched
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("text/plain");
    assert_eq!(fetched.text(), "{\"msg\": \"hi\"}");
}

#[tokio::test]
async fn second_create_overwrites() {
    let app = TestApp::new();

    app.client
        .post_json("/template", &json!({"name": "welcome", "content": "one"}))
        .await
        .assert_status(StatusCode::OK);
    app.client
        .post_json("/template", &json!({"name": "welcome", "content": "two"}))
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(app.client.get("/template/welcome").await.text(), "two");
}

#[tokio::test]
async fn content_is_returned_verbatim() {
    let app = TestApp::new();
    let content = "line one\n  {{uuid}} stays\n";

    app.client
        .post_json("/template", &json!({"name": "raw", "content": content}))
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(app.client.get("/template/raw").await.text(), content);
}

#[tokio::test]
async fn unknown_template_returns_404() {
    let app = TestApp::new();

    app.client
        .get("/template/missing")
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_content_type_contains("application/json")
        .assert_detail("Template not found");
}

// === Validation ===

#[tokio::test]
async fn missing_field_is_rejected() {
    let app = TestApp::new();

    let response = app
        .client
        .post_json("/template", &json!({"name": "welcome"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = TestApp::new();

    app.client
        .post_raw("/template", "application/json", "{not json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_content_type_is_rejected() {
    let app = TestApp::new();

    app.client
        .post_raw("/template", "text/plain", r#"{"name":"a","content":"b"}"#)
        .await
        .assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn blank_name_is_accepted() {
    let app = TestApp::new();

    app.client
        .post_json("/template", &json!({"name": " ", "content": "x"}))
        .await
        .assert_status(StatusCode::OK);

    let fetched = app.client.get("/template/%20").await;
    fetched.assert_status(StatusCode::OK);
    assert_eq!(fetched.text(), "x");
}

// === Store failures ===

#[tokio::test]
async fn store_failure_returns_500() {
    let app = TestApp::with_template_store(Arc::new(BrokenTemplateStore));

    app.client
        .post_json("/template", &json!({"name": "a", "content": "b"}))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail("Template store unavailable");

    app.client
        .get("/template/a")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail("Template store unavailable");
}

#[tokio::test]
async fn health_reports_down_when_store_fails() {
    let app = TestApp::with_template_store(Arc::new(BrokenTemplateStore));

    let response = app.client.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["status"], "DOWN");
}
