//! Database model for audit records.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finbook_core::audit::{AuditRecord, EssenceType, NewAuditRecord};
use finbook_core::time::now_millis;

/// Database model for audit records. Append-only, so there is no
/// `updated_at` column.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::audit_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuditRecordDB {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub essence_type: String,
    pub essence_id: String,
    pub created_at: i64,
}

impl AuditRecordDB {
    /// Builds a fresh row with a generated id.
    pub fn from_new(new_record: NewAuditRecord) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: new_record.user_id,
            text: new_record.text,
            essence_type: new_record.essence_type.as_str().to_string(),
            essence_id: new_record.essence_id,
            created_at: now_millis(),
        }
    }
}

// Conversion implementations
impl From<AuditRecordDB> for AuditRecord {
    fn from(db: AuditRecordDB) -> Self {
        let essence_type = EssenceType::from_str(&db.essence_type).unwrap_or_else(|| {
            log::warn!(
                "Unknown essence type '{}' on audit record '{}', reading as USER",
                db.essence_type,
                db.id
            );
            EssenceType::User
        });

        Self {
            id: db.id,
            user_id: db.user_id,
            text: db.text,
            essence_type,
            essence_id: db.essence_id,
            created_at: db.created_at,
        }
    }
}
