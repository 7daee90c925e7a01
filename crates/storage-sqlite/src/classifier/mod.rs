//! SQLite storage implementation for the classifier vocabularies.

mod model;
mod repository;

pub use model::{CurrencyDB, OperationCategoryDB};
pub use repository::ClassifierRepository;
