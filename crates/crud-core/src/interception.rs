//! Intercepted event lookup for integration tests.
//!
//! A test-only consumer subscribed to the event bus writes every event it
//! receives into a table keyed by `{event_source}#{event_name}#{receipt_id}`.
//! Tests pick a unique receipt id per run and embed the test name in the
//! event source, so parallel runs and shared stacks never collide on a key.
//!
//! Verifying a batch of events costs one lookup per event.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::DomainError;

/// An event captured by the interception consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventIntercepted {
    /// Serialized event metadata, opaque to the lookup.
    pub metadata: String,
    /// Receipt id the producer returned when the event was ingested.
    pub receipt_id: String,
    /// Serialized event payload, opaque to the lookup.
    pub data: String,
}

/// Builds the partition key under which an intercepted event is stored.
#[must_use]
pub fn intercepted_event_key(event_source: &str, event_name: &str, receipt_id: &str) -> String {
    format!("{event_source}#{event_name}#{receipt_id}")
}

/// Read access to the table of intercepted events.
#[async_trait]
pub trait InterceptedEventReader: Send + Sync {
    /// Returns every record stored under `pk` in `table_name`, in store order.
    async fn query_by_key(
        &self,
        table_name: &str,
        pk: &str,
    ) -> Result<Vec<EventIntercepted>, DomainError>;
}

/// Fetches the single intercepted event stored for the given composite key.
///
/// This is a point-in-time query: the producer under test must already have
/// written the record. Nothing is retried.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when no record exists under the key,
/// `DomainError::AmbiguousMatch` when more than one does, and propagates
/// reader failures unchanged.
#[instrument(skip(reader))]
pub async fn get_event_from_table(
    reader: &dyn InterceptedEventReader,
    table_name: &str,
    event_source: &str,
    event_name: &str,
    receipt_id: &str,
) -> Result<EventIntercepted, DomainError> {
    let pk = intercepted_event_key(event_source, event_name, receipt_id);
    let mut items = reader.query_by_key(table_name, &pk).await?;
    debug!(pk = %pk, matches = items.len(), "queried intercepted events");

    match items.len() {
        0 => Err(DomainError::NotFound(pk)),
        1 => Ok(items.remove(0)),
        count => Err(DomainError::AmbiguousMatch { key: pk, count }),
    }
}
