//! Query handlers for the Product context.

use crud_core::error::DomainError;
use serde::Serialize;
use tracing::instrument;

use crate::domain::product::{ProductEntry, ProductId};
use crate::domain::repository::ProductRepository;

/// Read-only view of a product, as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    /// The product identifier.
    pub id: String,
    /// The product name.
    pub name: String,
    /// The product price.
    pub price: i64,
    /// Creation timestamp, in epoch seconds.
    pub created_at: i64,
}

impl From<&ProductEntry> for ProductView {
    fn from(product: &ProductEntry) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_owned(),
            price: product.price(),
            created_at: product.created_at(),
        }
    }
}

/// Retrieves a product by id.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `product_id` is malformed and
/// `DomainError::NotFound` if no product is stored under it.
#[instrument(skip(repo))]
pub async fn get_product_by_id(
    product_id: &str,
    repo: &dyn ProductRepository,
) -> Result<ProductView, DomainError> {
    let id = ProductId::parse(product_id)?;
    let product = repo
        .get_product(&id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("product {id}")))?;
    Ok(ProductView::from(&product))
}
