//! Integration tests for the HTTP API
//! Drives the assembled router directly, no listening socket needed

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use chainopera_agent::api::create_router;

/// Read and parse a JSON response body
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

/// Build a POST /predict request with the given JSON body
fn predict_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

// ============================================================================
// Predict
// ============================================================================

#[tokio::test]
async fn predict_echoes_question() {
    let response = create_router()
        .oneshot(predict_request(r#"{"question": "What is 2+2?"}"#))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"answer": "You asked: What is 2+2?"})
    );
}

#[tokio::test]
async fn predict_accepts_empty_question() {
    let response = create_router()
        .oneshot(predict_request(r#"{"question": ""}"#))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"answer": "You asked: "}));
}

#[tokio::test]
async fn predict_is_deterministic() {
    let body = r#"{"question": "same question"}"#;

    let first = create_router()
        .oneshot(predict_request(body))
        .await
        .expect("Request failed");
    let second = create_router()
        .oneshot(predict_request(body))
        .await
        .expect("Request failed");

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, body_json(second).await);
}

#[tokio::test]
async fn predict_missing_question_is_client_error() {
    let response = create_router()
        .oneshot(predict_request("{}"))
        .await
        .expect("Request failed");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn predict_malformed_body_is_client_error() {
    let response = create_router()
        .oneshot(predict_request("not json"))
        .await
        .expect("Request failed");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn predict_non_text_question_is_client_error() {
    let response = create_router()
        .oneshot(predict_request(r#"{"question": 42}"#))
        .await
        .expect("Request failed");

    assert!(response.status().is_client_error());
}

// ============================================================================
// OpenAPI
// ============================================================================

#[tokio::test]
async fn openapi_document_lists_routes() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .uri("/api/openapi.json")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert!(doc["paths"]["/health"].is_object());
    assert!(doc["paths"]["/predict"].is_object());
}
