use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use finbook_core::audit::{AuditRecord, AuditSinkTrait, NewAuditRecord};
use finbook_core::errors::Result;
use finbook_core::paging::{Page, PageQuery};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::audit_records;

use super::model::AuditRecordDB;

/// Audit sink backed by the `audit_records` table.
pub struct SqliteAuditSink {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteAuditSink {
    /// Creates a new SqliteAuditSink instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

// Implement the trait
#[async_trait]
impl AuditSinkTrait for SqliteAuditSink {
    async fn record(&self, new_record: NewAuditRecord) -> Result<AuditRecord> {
        self.writer
            .exec(move |conn| {
                let record_db = AuditRecordDB::from_new(new_record);
                diesel::insert_into(audit_records::table)
                    .values(&record_db)
                    .execute(conn)
                    .into_core()?;

                Ok(record_db.into())
            })
            .await
    }

    /// Lists audit records one page at a time, newest first
    fn list_page(&self, query: &PageQuery) -> Result<Page<AuditRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let total_elements = audit_records::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()?;

        let results = audit_records::table
            .select(AuditRecordDB::as_select())
            .order((
                audit_records::created_at.desc(),
                audit_records::id.asc(),
            ))
            .limit(query.limit())
            .offset(query.offset())
            .load::<AuditRecordDB>(&mut conn)
            .into_core()?;

        let content: Vec<AuditRecord> = results.into_iter().map(AuditRecord::from).collect();
        Ok(Page::new(content, query, total_elements))
    }
}
