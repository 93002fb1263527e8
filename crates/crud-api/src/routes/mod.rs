//! Route modules.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod products;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/products", products::router())
        .with_state(state)
}
