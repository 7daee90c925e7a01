//! Database model for operations.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finbook_core::operations::{NewOperation, Operation};
use finbook_core::time::{now_millis, Timestamps};

use crate::utils::parse_decimal_column;

/// Database model for operations
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::operations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OperationDB {
    pub id: String,
    pub account_id: String,
    pub date: i64,
    pub description: Option<String>,
    pub category_id: String,
    pub value: String,
    pub currency_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl OperationDB {
    /// Builds a fresh row for `account_id` with a generated id.
    pub fn from_new(account_id: &str, new_operation: NewOperation) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            date: new_operation.date,
            description: new_operation.description,
            category_id: new_operation.category_id,
            value: new_operation.value.to_string(),
            currency_id: new_operation.currency_id,
            created_at: now,
            updated_at: now,
        }
    }
}

// Conversion implementations
impl From<OperationDB> for Operation {
    fn from(db: OperationDB) -> Self {
        let value = parse_decimal_column(&db.value, "value");

        Self {
            id: db.id,
            account_id: db.account_id,
            date: db.date,
            description: db.description,
            category_id: db.category_id,
            value,
            currency_id: db.currency_id,
            timestamps: Timestamps {
                created_at: db.created_at,
                updated_at: db.updated_at,
            },
        }
    }
}
