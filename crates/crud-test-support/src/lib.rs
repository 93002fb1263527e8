//! Shared test doubles and utilities for the serverless product CRUD service.

mod clock;
mod interception;
mod repository;

pub use clock::FixedClock;
pub use interception::InMemoryInterceptedEvents;
pub use repository::{FailingProductRepository, InMemoryProductRepository};
