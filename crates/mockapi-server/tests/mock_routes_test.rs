//! Tests de los endpoints mock.

mod helpers;

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use helpers::{TestApp, client, client_with_metrics};
use serde_json::Value;
use uuid::Uuid;

fn is_order_id(id: &str) -> bool {
    id.strip_prefix("ord-").is_some_and(|hex| {
        hex.len() == 6 && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    })
}

// === Root ===

#[tokio::test]
async fn root_returns_greeting() {
    let response = client().get("/").await;

    response
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("application/json");
    assert_eq!(response.json::<Value>(), serde_json::json!({"Hello": "World"}));
}

// === User ===

#[tokio::test]
async fn mock_user_has_fixed_name_and_fresh_id() {
    let first: Value = client().get("/mock/user").await.json();
    let second: Value = client().get("/mock/user").await.json();

    assert_eq!(first["name"], "Ganteng");
    assert_eq!(first["email"], "ganteng@example.com");
    let id = first["id"].as_str().unwrap();
    assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
    assert_ne!(first["id"], second["id"]);
}

// === Order ===

#[tokio::test]
async fn order_status_mapping() {
    let cases = [
        ("success", StatusCode::OK),
        ("failed", StatusCode::BAD_REQUEST),
        ("pending", StatusCode::ACCEPTED),
        ("weird", StatusCode::OK),
        ("SUCCESS", StatusCode::OK),
    ];

    for (label, expected) in cases {
        let response = client().get(&format!("/mock/order/{}", label)).await;
        response.assert_status(expected);

        let body: Value = response.json();
        assert_eq!(body["status"], label);
        assert!(is_order_id(body["order_id"].as_str().unwrap()), "{}", body);
    }
}

#[tokio::test]
async fn order_ids_differ_across_calls() {
    let first: Value = client().get("/mock/order/success").await.json();
    let second: Value = client().get("/mock/order/success").await.json();

    assert_ne!(first["order_id"], second["order_id"]);
}

#[tokio::test]
async fn failed_order_still_returns_body() {
    let response = client().get("/mock/order/failed").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "failed");
}

// === Payment ===

#[tokio::test]
async fn payment_substitutes_placeholders() {
    let app = TestApp::new();
    app.write_payment_template(
        r#"{"payment_id": "{{uuid}}", "created_at": {{timestamp}}, "ref": "{{uuid}}"}"#,
    );

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let response = app.client.get("/mock/payment").await;

    response
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("application/json");
    let text = response.text();
    assert!(!text.contains("{{"), "Unsubstituted token in {}", text);

    let body: Value = response.json();
    assert!(Uuid::parse_str(body["payment_id"].as_str().unwrap()).is_ok());
    assert_eq!(body["payment_id"], body["ref"]);
    let created_at = body["created_at"].as_u64().unwrap();
    assert!(created_at.abs_diff(now) <= 5);
}

#[tokio::test]
async fn payment_body_is_not_parsed() {
    let app = TestApp::new();
    app.write_payment_template("id={{uuid}} not json");

    let response = app.client.get("/mock/payment").await;

    response
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("application/json");
    assert!(response.text().starts_with("id="));
    assert!(response.text().ends_with(" not json"));
}

#[tokio::test]
async fn payment_template_missing_returns_404() {
    let app = TestApp::new();

    app.client
        .get("/mock/payment")
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_detail("Payment not found");
}

// === Docs ===

#[tokio::test]
async fn docs_lists_endpoints() {
    let response = client().get("/docs").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["name"], "mockapi-server");
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e["path"] == "/mock/payment"));
}

#[tokio::test]
async fn docs_omits_metrics_when_not_mounted() {
    let app = client();

    let body: Value = app.get("/docs").await.json();
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().all(|e| e["path"] != "/metrics"));

    app.get("/metrics").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn docs_lists_metrics_when_mounted() {
    let app = client_with_metrics();

    let body: Value = app.get("/docs").await.json();
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e["path"] == "/metrics"));

    app.get("/metrics").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    client()
        .get("/does/not/exist")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
