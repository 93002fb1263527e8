//! Attribute access helpers shared by the table adapters.

use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use crud_core::error::DomainError;

/// A DynamoDB item as the SDK represents it.
pub type Item = HashMap<String, AttributeValue>;

/// Reads a string (`S`) attribute.
pub(crate) fn string_attr(item: &Item, name: &str) -> Result<String, DomainError> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(DomainError::Infrastructure(format!(
            "attribute {name} is not a string"
        ))),
        None => Err(DomainError::Infrastructure(format!(
            "attribute {name} is missing"
        ))),
    }
}

/// Reads a number (`N`) attribute as an `i64`.
pub(crate) fn integer_attr(item: &Item, name: &str) -> Result<i64, DomainError> {
    match item.get(name) {
        Some(AttributeValue::N(raw)) => raw.parse().map_err(|e| {
            DomainError::Infrastructure(format!("attribute {name} is not an integer: {e}"))
        }),
        Some(_) => Err(DomainError::Infrastructure(format!(
            "attribute {name} is not a number"
        ))),
        None => Err(DomainError::Infrastructure(format!(
            "attribute {name} is missing"
        ))),
    }
}

/// Maps an SDK failure to an infrastructure error, keeping the full source
/// chain in the message.
pub(crate) fn sdk_error<E>(operation: &str, err: E) -> DomainError
where
    E: std::error::Error,
{
    DomainError::Infrastructure(format!("{operation} failed: {}", DisplayErrorContext(err)))
}
