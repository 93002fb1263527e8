//! Commands for the Product context.

use uuid::Uuid;

/// Command to create (or overwrite) a product.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Caller-chosen product id. `None` assigns a fresh one.
    pub product_id: Option<String>,
    /// The product name.
    pub name: String,
    /// The product price.
    pub price: i64,
}

/// Command to delete a product.
#[derive(Debug, Clone)]
pub struct DeleteProduct {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The product identifier, not yet validated.
    pub product_id: String,
}
