//! Routes for the Product context.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crud_product::application::query_handlers::{self, ProductView};
use crud_product::application::command_handlers;
use crud_product::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a product. Id and `created_at` are assigned
/// server-side.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// The product name.
    pub name: String,
    /// The product price.
    pub price: i64,
}

/// POST /
#[instrument(skip(state, request))]
async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<ProductView>, ApiError> {
    create(&state, None, request).await
}

/// PUT /{product}
#[instrument(skip(state, request))]
async fn put_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<ProductView>, ApiError> {
    create(&state, Some(product_id), request).await
}

async fn create(
    state: &AppState,
    product_id: Option<String>,
    request: CreateProductRequest,
) -> Result<Json<ProductView>, ApiError> {
    let command = commands::CreateProduct {
        correlation_id: Uuid::new_v4(),
        product_id,
        name: request.name,
        price: request.price,
    };

    info!(correlation_id = %command.correlation_id, "handling create_product command");

    let product = command_handlers::handle_create_product(
        &command,
        state.clock.as_ref(),
        &*state.product_repository,
    )
    .await?;

    Ok(Json(ProductView::from(&product)))
}

/// GET /{product}
#[instrument(skip(state))]
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductView>, ApiError> {
    let view = query_handlers::get_product_by_id(&product_id, &*state.product_repository).await?;
    Ok(Json(view))
}

/// DELETE /{product}
#[instrument(skip(state))]
async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteProduct {
        correlation_id: Uuid::new_v4(),
        product_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_product command");

    command_handlers::handle_delete_product(&command, &*state.product_repository).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the product context.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_product)).route(
        "/{product}",
        get(get_product).put(put_product).delete(delete_product),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use crud_product::domain::repository::ProductRepository;
    use crud_test_support::{FailingProductRepository, FixedClock, InMemoryProductRepository};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_with(product_repository: Arc<dyn ProductRepository>) -> Router {
        let state = AppState::new(Arc::new(FixedClock::reference()), product_repository);
        router().with_state(state)
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_product_returns_200_with_assigned_id() {
        // Arrange
        let repo = Arc::new(InMemoryProductRepository::new());
        let app = app_with(repo.clone());
        let body = serde_json::json!({ "name": "Widget", "price": 100 });

        // Act
        let response = app.oneshot(json_request("POST", "/", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let id = json["id"].as_str().unwrap();
        assert_eq!(id.len(), 36);
        Uuid::parse_str(id).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 100);
        assert_eq!(json["created_at"], 1_768_471_200);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_product_returns_400_listing_each_bad_field() {
        // Arrange
        let repo = Arc::new(InMemoryProductRepository::new());
        let app = app_with(repo.clone());
        let body = serde_json::json!({ "name": "", "price": -1 });

        // Act
        let response = app.oneshot(json_request("POST", "/", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "validation_error");
        let fields: Vec<&str> = json["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["name", "price"]);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_create_product_returns_422_for_missing_price() {
        // Arrange
        let app = app_with(Arc::new(InMemoryProductRepository::new()));
        let body = serde_json::json!({ "name": "Widget" });

        // Act
        let response = app.oneshot(json_request("POST", "/", &body)).await.unwrap();

        // Assert: Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_put_product_uses_path_id() {
        // Arrange
        let app = app_with(Arc::new(InMemoryProductRepository::new()));
        let id = Uuid::new_v4();
        let body = serde_json::json!({ "name": "Widget", "price": 5 });

        // Act
        let response = app
            .oneshot(json_request("PUT", &format!("/{id}"), &body))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], id.to_string());
    }

    #[tokio::test]
    async fn test_put_product_rejects_malformed_path_id() {
        let app = app_with(Arc::new(InMemoryProductRepository::new()));
        let body = serde_json::json!({ "name": "Widget", "price": 5 });

        let response = app
            .oneshot(json_request("PUT", "/not-a-uuid", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["fields"][0]["field"], "id");
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() {
        let app = app_with(Arc::new(InMemoryProductRepository::new()));
        let request = Request::builder()
            .method("GET")
            .uri(format!("/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "not_found");
    }

    #[tokio::test]
    async fn test_delete_product_returns_204() {
        let app = app_with(Arc::new(InMemoryProductRepository::new()));
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_create_product_returns_500_when_repository_fails() {
        // Arrange
        let app = app_with(Arc::new(FailingProductRepository));
        let body = serde_json::json!({ "name": "Widget", "price": 100 });

        // Act
        let response = app.oneshot(json_request("POST", "/", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "infrastructure_error");
    }
}
