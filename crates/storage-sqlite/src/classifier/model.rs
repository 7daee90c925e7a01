//! Database models for the classifier vocabularies.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finbook_core::classifier::{Currency, NewCurrency, NewOperationCategory, OperationCategory};
use finbook_core::time::{now_millis, Timestamps};

/// Database model for currencies
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::currencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl CurrencyDB {
    pub fn from_new(new_currency: NewCurrency) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            title: new_currency.title,
            description: new_currency.description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            timestamps: Timestamps {
                created_at: db.created_at,
                updated_at: db.updated_at,
            },
        }
    }
}

/// Database model for operation categories
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::operation_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OperationCategoryDB {
    pub id: String,
    pub title: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl OperationCategoryDB {
    pub fn from_new(new_category: NewOperationCategory) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            title: new_category.title,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<OperationCategoryDB> for OperationCategory {
    fn from(db: OperationCategoryDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            timestamps: Timestamps {
                created_at: db.created_at,
                updated_at: db.updated_at,
            },
        }
    }
}
