//! DynamoDB implementation of the `ProductRepository` trait.
//!
//! Table layout: partition key `id` (S), attributes `name` (S), `price` (N),
//! `created_at` (N).

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, instrument};

use crud_core::error::DomainError;
use crud_product::domain::product::{ProductDraft, ProductEntry, ProductId};
use crud_product::domain::repository::ProductRepository;

use crate::item::{Item, integer_attr, sdk_error, string_attr};

/// DynamoDB-backed product repository.
#[derive(Debug, Clone)]
pub struct DynamoProductRepository {
    client: Client,
    table_name: String,
}

impl DynamoProductRepository {
    /// Creates a new `DynamoProductRepository` over `table_name`.
    #[must_use]
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// The table this repository reads and writes.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Converts a product into its table item.
#[must_use]
pub fn product_to_item(product: &ProductEntry) -> Item {
    Item::from([
        ("id".to_owned(), AttributeValue::S(product.id().to_string())),
        ("name".to_owned(), AttributeValue::S(product.name().to_owned())),
        ("price".to_owned(), AttributeValue::N(product.price().to_string())),
        (
            "created_at".to_owned(),
            AttributeValue::N(product.created_at().to_string()),
        ),
    ])
}

/// Converts a table item back into a validated product.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if an attribute is missing or has
/// the wrong type, or if the stored values no longer pass validation.
pub fn product_from_item(item: &Item) -> Result<ProductEntry, DomainError> {
    let draft = ProductDraft {
        name: string_attr(item, "name")?,
        id: string_attr(item, "id")?,
        price: integer_attr(item, "price")?,
        created_at: integer_attr(item, "created_at")?,
    };
    ProductEntry::new(draft)
        .map_err(|e| DomainError::Infrastructure(format!("stored product is invalid: {e}")))
}

#[async_trait]
impl ProductRepository for DynamoProductRepository {
    #[instrument(skip(self, product), fields(table = %self.table_name, product_id = %product.id()))]
    async fn put_product(&self, product: &ProductEntry) -> Result<(), DomainError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(product)))
            .send()
            .await
            .map_err(|e| sdk_error("PutItem", e))?;
        debug!("product item written");
        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductEntry>, DomainError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| sdk_error("GetItem", e))?;

        output.item().map(product_from_item).transpose()
    }

    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn delete_product(&self, id: &ProductId) -> Result<(), DomainError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| sdk_error("DeleteItem", e))?;
        debug!("product item deleted");
        Ok(())
    }
}
