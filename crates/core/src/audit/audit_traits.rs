//! Audit sink trait and the best-effort write helper.

use async_trait::async_trait;
use log::error;

use super::audit_model::{AuditRecord, NewAuditRecord};
use crate::errors::Result;
use crate::paging::{Page, PageQuery};

/// Destination for audit records.
///
/// Admin mutations append through this trait; the admin listing reads
/// through it as well.
#[async_trait]
pub trait AuditSinkTrait: Send + Sync {
    /// Appends one audit record.
    async fn record(&self, new_record: NewAuditRecord) -> Result<AuditRecord>;

    /// Lists audit records one page at a time, newest first.
    fn list_page(&self, query: &PageQuery) -> Result<Page<AuditRecord>>;
}

/// Appends an audit record, logging and swallowing any failure.
///
/// Audit is a side effect of an already committed admin mutation; a broken
/// sink must not turn that success into an error.
pub async fn record_best_effort(sink: &dyn AuditSinkTrait, new_record: NewAuditRecord) {
    if let Err(e) = sink.record(new_record).await {
        error!("Failed to write audit record: {}", e);
    }
}
