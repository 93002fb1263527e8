//! Product repository abstraction.

use async_trait::async_trait;
use crud_core::error::DomainError;

use super::product::{ProductEntry, ProductId};

/// Repository trait for persisting product records keyed by `id`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores the product, replacing any record with the same id.
    async fn put_product(&self, product: &ProductEntry) -> Result<(), DomainError>;

    /// Loads the product with the given id, if one exists.
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductEntry>, DomainError>;

    /// Deletes the product with the given id. Deleting a missing id succeeds.
    async fn delete_product(&self, id: &ProductId) -> Result<(), DomainError>;
}
