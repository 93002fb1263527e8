//! Integration tests for the health endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use crud_test_support::InMemoryProductRepository;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app(Arc::new(InMemoryProductRepository::new()));

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app(Arc::new(InMemoryProductRepository::new()));

    let (status, _) = common::get_json(app, "/api/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
