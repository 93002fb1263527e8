//! Serverless CRUD — Product bounded context.
//!
//! Responsible for validating product records and orchestrating their
//! creation, retrieval, and deletion against a `ProductRepository`.

pub mod application;
pub mod domain;
