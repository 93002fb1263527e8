//! DynamoDB adapters for the serverless product CRUD service.
//!
//! The SDK client is built once by the caller via [`build_client`] and
//! handed to each adapter; adapters never construct their own.

mod client;
mod item;
pub mod intercepted_events;
pub mod product_table;

pub use client::build_client;
pub use item::Item;
pub use intercepted_events::DynamoInterceptedEventReader;
pub use product_table::DynamoProductRepository;
