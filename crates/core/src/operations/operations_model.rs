//! Operation domain models.
//!
//! An operation is one signed money movement inside an account: income is
//! positive, expense is negative. The account's balance is always the sum
//! of its operation values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::{validate_description, validate_reference};
use crate::errors::Result;
use crate::time::Timestamps;

/// Domain model representing one money movement.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    pub account_id: String,
    /// When the movement happened, epoch milliseconds. Distinct from
    /// `created_at`, which records when the row was written.
    pub date: i64,
    pub description: Option<String>,
    /// Reference into the category classifier
    pub category_id: String,
    /// Signed amount: positive income, negative expense
    pub value: Decimal,
    /// Reference into the currency classifier
    pub currency_id: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Input model for creating a new operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOperation {
    pub date: i64,
    pub description: Option<String>,
    pub category_id: String,
    pub value: Decimal,
    pub currency_id: String,
}

impl NewOperation {
    /// Validates the new operation data.
    pub fn validate(&self) -> Result<()> {
        validate_description(self.description.as_deref())?;
        validate_reference(&self.category_id, "Category id")?;
        validate_reference(&self.currency_id, "Currency id")?;
        Ok(())
    }
}

/// Input model for updating an existing operation.
///
/// All fields are replaced; the operation id, account id and expected
/// version travel as separate call parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationUpdate {
    pub date: i64,
    pub description: Option<String>,
    pub category_id: String,
    pub value: Decimal,
    pub currency_id: String,
}

impl OperationUpdate {
    /// Validates the operation update data.
    pub fn validate(&self) -> Result<()> {
        validate_description(self.description.as_deref())?;
        validate_reference(&self.category_id, "Category id")?;
        validate_reference(&self.currency_id, "Currency id")?;
        Ok(())
    }
}
