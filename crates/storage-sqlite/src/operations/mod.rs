//! SQLite storage implementation for operations.

mod balance;
mod model;
mod repository;

pub use model::OperationDB;
pub use repository::OperationRepository;
