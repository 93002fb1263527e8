//! Application services for the Product context.

pub mod command_handlers;
pub mod query_handlers;
