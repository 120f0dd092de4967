//! Router-level tests for the gateway, run against the stub scorer.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use rerankd::scoring::{RelevanceScorer, ScoreResult};

use crate::gateway::{RERANKD_STATUS_HEADER, create_router_with_state};
use crate::gateway::state::HandlerState;

fn test_router() -> Router {
    let scorer = Arc::new(RelevanceScorer::stub().expect("stub scorer should load"));
    create_router_with_state(HandlerState::new(scorer))
}

fn rerank_request(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/rerank")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(RERANKD_STATUS_HEADER).unwrap(),
        "healthy"
    );

    let body = response_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_ready_reports_stub_mode() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["model_mode"], "stub");
}

#[tokio::test]
async fn test_rerank_scores_every_document() {
    let app = test_router();

    let body = serde_json::json!({
        "query": "What is Rust?",
        "documents": [
            "Rust is a systems programming language",
            "Python is great for data science",
            "JavaScript runs in browsers"
        ]
    });

    let response = app.oneshot(rerank_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let results: Vec<ScoreResult> =
        serde_json::from_value(response_json(response).await).unwrap();

    assert_eq!(results.len(), 3);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.index, i);
        assert!(result.score > 0.0);
        assert!(result.score < 1.0);
    }
}

#[tokio::test]
async fn test_rerank_empty_documents() {
    let app = test_router();

    let body = serde_json::json!({"query": "anything", "documents": []});
    let response = app.oneshot(rerank_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_rerank_relevant_document_scores_higher() {
    let app = test_router();

    let body = serde_json::json!({
        "query": "capital of France",
        "documents": ["Paris is the capital of France.", "Bananas are yellow."]
    });

    let response = app.oneshot(rerank_request(&body)).await.unwrap();
    let results: Vec<ScoreResult> =
        serde_json::from_value(response_json(response).await).unwrap();

    assert!(results[0].score > results[1].score);
}

#[tokio::test]
async fn test_rerank_missing_query_rejected() {
    let app = test_router();

    let body = serde_json::json!({"documents": ["one", "two"]});
    let response = app.oneshot(rerank_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(RERANKD_STATUS_HEADER).unwrap(),
        "invalid_request"
    );

    let body = response_json(response).await;
    assert_eq!(body["code"], 400);
    assert!(body["error"].as_str().unwrap().contains("invalid request"));
}

#[tokio::test]
async fn test_rerank_missing_documents_rejected() {
    let app = test_router();

    let body = serde_json::json!({"query": "hello"});
    let response = app.oneshot(rerank_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rerank_wrong_documents_type_rejected() {
    let app = test_router();

    let body = serde_json::json!({"query": "hello", "documents": "not an array"});
    let response = app.oneshot(rerank_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rerank_wrong_query_type_rejected() {
    let app = test_router();

    let body = serde_json::json!({"query": 42, "documents": ["one"]});
    let response = app.oneshot(rerank_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rerank_non_object_body_rejected() {
    let app = test_router();

    let body = serde_json::json!(["not", "an", "object"]);
    let response = app.oneshot(rerank_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rerank_identical_requests_identical_scores() {
    let body = serde_json::json!({
        "query": "fish",
        "documents": ["one fish", "two fish", "red fish"]
    });

    let first = test_router().oneshot(rerank_request(&body)).await.unwrap();
    let second = test_router().oneshot(rerank_request(&body)).await.unwrap();

    let first: Vec<ScoreResult> = serde_json::from_value(response_json(first).await).unwrap();
    let second: Vec<ScoreResult> = serde_json::from_value(response_json(second).await).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
