//! In-memory stand-in for the intercepted events table.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use crud_core::error::DomainError;
use crud_core::interception::{EventIntercepted, InterceptedEventReader, intercepted_event_key};

/// Records intercepted events per `(table, pk)` the way the interception
/// consumer would, so lookups can be exercised without a live table.
#[derive(Debug, Default)]
pub struct InMemoryInterceptedEvents {
    tables: Mutex<HashMap<(String, String), Vec<EventIntercepted>>>,
}

impl InMemoryInterceptedEvents {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `event` under the composite key built from its source, name,
    /// and receipt id.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn intercept(
        &self,
        table_name: &str,
        event_source: &str,
        event_name: &str,
        event: EventIntercepted,
    ) {
        let pk = intercepted_event_key(event_source, event_name, &event.receipt_id);
        self.tables
            .lock()
            .unwrap()
            .entry((table_name.to_owned(), pk))
            .or_default()
            .push(event);
    }
}

#[async_trait]
impl InterceptedEventReader for InMemoryInterceptedEvents {
    async fn query_by_key(
        &self,
        table_name: &str,
        pk: &str,
    ) -> Result<Vec<EventIntercepted>, DomainError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .get(&(table_name.to_owned(), pk.to_owned()))
            .cloned()
            .unwrap_or_default())
    }
}
