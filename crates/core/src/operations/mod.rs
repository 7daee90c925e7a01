//! Operations module - domain models, services, and traits.

mod operations_model;
mod operations_service;
mod operations_traits;


// Re-export the public interface
pub use operations_model::{NewOperation, Operation, OperationUpdate};
pub use operations_service::OperationService;
pub use operations_traits::{OperationRepositoryTrait, OperationServiceTrait};
