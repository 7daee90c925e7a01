//! Finbook Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for finbook.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod accounts;
pub mod audit;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod operations;
pub mod paging;
pub mod time;
pub mod users;
pub mod version;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
