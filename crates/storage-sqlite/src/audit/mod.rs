//! SQLite storage implementation for the audit trail.

mod model;
mod sink;

pub use model::AuditRecordDB;
pub use sink::SqliteAuditSink;
