//! Serverless CRUD Core — shared domain abstractions.
//!
//! This crate defines the error taxonomy, the clock abstraction, and the
//! event-interception lookup used by integration tests. It contains no
//! infrastructure code: store adapters live in `crud-dynamodb`.

pub mod clock;
pub mod error;
pub mod interception;
