//! Classifier module - currencies and operation categories.

mod classifier_model;
mod classifier_service;
mod classifier_traits;

// Re-export the public interface
pub use classifier_model::{Currency, NewCurrency, NewOperationCategory, OperationCategory};
pub use classifier_service::ClassifierService;
pub use classifier_traits::{ClassifierRepositoryTrait, ClassifierServiceTrait};
