//! Domain model for the Product context.

pub mod commands;
pub mod product;
pub mod repository;
