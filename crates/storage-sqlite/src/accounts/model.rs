//! Database model for accounts.

use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finbook_core::accounts::{Account, AccountType, NewAccount};
use finbook_core::time::{now_millis, Timestamps};

use crate::utils::parse_decimal_column;

/// Database model for accounts
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub account_type: String,
    pub currency_id: String,
    pub balance: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl AccountDB {
    /// Builds a fresh row for `owner_id` with a generated id and a zero
    /// balance.
    pub fn from_new(owner_id: &str, new_account: NewAccount) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: new_account.title,
            description: new_account.description,
            account_type: new_account.account_type.as_str().to_string(),
            currency_id: new_account.currency_id,
            balance: Decimal::ZERO.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

// Conversion implementations
impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        let account_type = AccountType::from_str(&db.account_type).unwrap_or_else(|| {
            log::warn!(
                "Unknown account type '{}' on account '{}', reading as {}",
                db.account_type,
                db.id,
                AccountType::default().as_str()
            );
            AccountType::default()
        });
        let balance = parse_decimal_column(&db.balance, "balance");

        Self {
            id: db.id,
            owner_id: db.owner_id,
            title: db.title,
            description: db.description,
            account_type,
            currency_id: db.currency_id,
            balance,
            timestamps: Timestamps {
                created_at: db.created_at,
                updated_at: db.updated_at,
            },
        }
    }
}
