//! Audit module - append-only records of admin actions.

mod audit_model;
mod audit_traits;

// Re-export the public interface
pub use audit_model::{AuditRecord, EssenceType, NewAuditRecord};
pub use audit_traits::{record_best_effort, AuditSinkTrait};
