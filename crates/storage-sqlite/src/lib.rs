//! SQLite storage implementation for finbook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `finbook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! All other crates are database-agnostic and work with traits.
//!
//! Reads go straight through the connection pool. Every write is sent to a
//! single-connection writer task and runs inside one immediate transaction,
//! so a mutation's ownership check, version check, write, and balance
//! recompute are atomic with respect to all other writes.

pub mod db;
pub mod errors;
pub mod schema;
pub(crate) mod utils;

// Repository implementations
pub mod accounts;
pub mod audit;
pub mod classifier;
pub mod operations;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from finbook-core for convenience
pub use finbook_core::errors::{DatabaseError, Error, Result};
