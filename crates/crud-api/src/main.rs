//! Serverless CRUD API entry point.
//!
//! Runs under the Lambda runtime when `AWS_LAMBDA_RUNTIME_API` is set, and as
//! a plain HTTP server otherwise.

use std::net::SocketAddr;
use std::sync::Arc;

use crud_api::config::ServiceConfig;
use crud_api::error::AppError;
use crud_api::routes;
use crud_api::state::AppState;
use crud_core::clock::SystemClock;
use crud_dynamodb::{DynamoProductRepository, build_client};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        table_name = %config.table_name,
        lambda = config.lambda,
        "Starting product CRUD API"
    );

    // One client for the process lifetime, shared by every request.
    let client = build_client(config.dynamodb_endpoint.as_deref()).await;
    let product_repository = Arc::new(DynamoProductRepository::new(
        client,
        config.table_name.clone(),
    ));
    let app_state = AppState::new(Arc::new(SystemClock), product_repository);

    // TODO: Replace CorsLayer::permissive() with the API Gateway allowed origins.
    let app = routes::router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    if config.lambda {
        return lambda_http::run(app)
            .await
            .map_err(|e| AppError::Lambda(e.to_string()));
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
