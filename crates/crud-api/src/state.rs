//! Shared application state.

use std::sync::Arc;

use crud_core::clock::Clock;
use crud_product::domain::repository::ProductRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp `created_at`.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Product persistence.
    pub product_repository: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        product_repository: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            clock,
            product_repository,
        }
    }
}
