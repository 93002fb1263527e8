//! Serverless CRUD — HTTP API.
//!
//! The same axum router is served either by a local TCP listener or by the
//! Lambda runtime behind API Gateway.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
