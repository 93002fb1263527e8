//! DynamoDB reader for the intercepted events table.
//!
//! Table layout: partition key `pk` (S) holding
//! `{event_source}#{event_name}#{receipt_id}`, attributes `metadata`,
//! `receipt_id`, and `data` (all S).

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::instrument;

use crud_core::error::DomainError;
use crud_core::interception::{EventIntercepted, InterceptedEventReader};

use crate::item::{Item, sdk_error, string_attr};

/// Queries intercepted events by partition key.
#[derive(Debug, Clone)]
pub struct DynamoInterceptedEventReader {
    client: Client,
}

impl DynamoInterceptedEventReader {
    /// Creates a reader using an existing client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Converts a table item into an intercepted event.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if any attribute is missing or is
/// not a string.
pub fn event_from_item(item: &Item) -> Result<EventIntercepted, DomainError> {
    Ok(EventIntercepted {
        metadata: string_attr(item, "metadata")?,
        receipt_id: string_attr(item, "receipt_id")?,
        data: string_attr(item, "data")?,
    })
}

#[async_trait]
impl InterceptedEventReader for DynamoInterceptedEventReader {
    // Reads the first result page only; a key holds one event in practice.
    #[instrument(skip(self))]
    async fn query_by_key(
        &self,
        table_name: &str,
        pk: &str,
    ) -> Result<Vec<EventIntercepted>, DomainError> {
        let output = self
            .client
            .query()
            .table_name(table_name)
            .key_condition_expression("pk = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(pk.to_owned()))
            .send()
            .await
            .map_err(|e| sdk_error("Query", e))?;

        output.items().iter().map(event_from_item).collect()
    }
}
