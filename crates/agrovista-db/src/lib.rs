//! Agrovista Database — SurrealDB connection management and
//! repository implementations.
//!
//! This crate provides:
//! - Connection management ([`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Error types ([`DbError`])
//! - Repository implementations for the `agrovista-core` traits

mod connection;
mod error;
mod schema;

pub mod repository;

pub use connection::DbConfig;
pub use error::DbError;
pub use schema::run_migrations;
