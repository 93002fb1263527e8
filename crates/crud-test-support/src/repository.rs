//! Test repositories — mock `ProductRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use crud_core::error::DomainError;
use crud_product::domain::product::{ProductEntry, ProductId};
use crud_product::domain::repository::ProductRepository;

/// A product repository backed by a `HashMap`. Behaves like the real table
/// for single-item reads and writes.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<ProductId, ProductEntry>>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `products`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = ProductEntry>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.products.lock().unwrap();
            for product in products {
                map.insert(product.id().clone(), product);
            }
        }
        repo
    }

    /// Returns a snapshot of the stored product with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn stored(&self, id: &ProductId) -> Option<ProductEntry> {
        self.products.lock().unwrap().get(id).cloned()
    }

    /// Returns how many products are stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    /// Returns `true` if nothing is stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn put_product(&self, product: &ProductEntry) -> Result<(), DomainError> {
        self.products
            .lock()
            .unwrap()
            .insert(product.id().clone(), product.clone());
        Ok(())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductEntry>, DomainError> {
        Ok(self.stored(id))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), DomainError> {
        self.products.lock().unwrap().remove(id);
        Ok(())
    }
}

/// A product repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingProductRepository;

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn put_product(&self, _product: &ProductEntry) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn get_product(&self, _id: &ProductId) -> Result<Option<ProductEntry>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete_product(&self, _id: &ProductId) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
