//! Command handlers for the Product context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: assign identity, validate, persist.

use crud_core::clock::Clock;
use crud_core::error::DomainError;
use tracing::{info, instrument};

use crate::domain::commands::{CreateProduct, DeleteProduct};
use crate::domain::product::{ProductDraft, ProductEntry, ProductId};
use crate::domain::repository::ProductRepository;

/// Handles the `CreateProduct` command: assigns the id and creation time,
/// validates the resulting entry, and persists it.
///
/// A caller-chosen id is validated together with the other fields, so a bad
/// id and a bad price are reported in the same error.
///
/// # Errors
///
/// Returns `DomainError::Validation` if any field is invalid, or the
/// repository's error if persisting fails.
#[instrument(skip(command, clock, repo), fields(correlation_id = %command.correlation_id))]
pub async fn handle_create_product(
    command: &CreateProduct,
    clock: &dyn Clock,
    repo: &dyn ProductRepository,
) -> Result<ProductEntry, DomainError> {
    let id = match &command.product_id {
        Some(id) => id.clone(),
        None => ProductId::generate().into(),
    };

    let product = ProductEntry::new(ProductDraft {
        name: command.name.clone(),
        id,
        price: command.price,
        created_at: clock.epoch_seconds(),
    })?;

    repo.put_product(&product).await?;
    info!(product_id = %product.id(), "product created");

    Ok(product)
}

/// Handles the `DeleteProduct` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the id is malformed, or the
/// repository's error if the delete fails.
#[instrument(skip(command, repo), fields(correlation_id = %command.correlation_id))]
pub async fn handle_delete_product(
    command: &DeleteProduct,
    repo: &dyn ProductRepository,
) -> Result<(), DomainError> {
    let id = ProductId::parse(&command.product_id)?;

    repo.delete_product(&id).await?;
    info!(product_id = %id, "product deleted");

    Ok(())
}
