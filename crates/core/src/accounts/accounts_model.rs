//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::time::Timestamps;
use crate::{errors::ValidationError, Error, Result};

/// Kind of money store an account represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Cash,
    BankAccount,
    BankDeposit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Cash => "CASH",
            AccountType::BankAccount => "BANK_ACCOUNT",
            AccountType::BankDeposit => "BANK_DEPOSIT",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "CASH" => Some(AccountType::Cash),
            "BANK_ACCOUNT" => Some(AccountType::BankAccount),
            "BANK_DEPOSIT" => Some(AccountType::BankDeposit),
            _ => None,
        }
    }
}

/// Domain model representing a money account owned by one user.
///
/// `balance` is derived state: it is always the sum of the account's
/// operation values and is recomputed by the storage layer after every
/// operation mutation. Nothing else writes it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub account_type: AccountType,
    /// Reference into the currency classifier
    pub currency_id: String,
    pub balance: Decimal,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Input model for creating a new account.
///
/// Carries no owner: the service receives the caller id separately. Carries
/// no balance either, new accounts always start at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub title: String,
    pub description: Option<String>,
    pub account_type: AccountType,
    pub currency_id: String,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_description(self.description.as_deref())?;
        validate_reference(&self.currency_id, "Currency id")?;
        Ok(())
    }
}

/// Input model for updating an existing account.
///
/// The account id and the expected version travel as separate call
/// parameters, not in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub title: String,
    pub description: Option<String>,
    pub account_type: AccountType,
    pub currency_id: String,
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_description(self.description.as_deref())?;
        validate_reference(&self.currency_id, "Currency id")?;
        Ok(())
    }
}

pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Title cannot be empty".to_string(),
        )));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Title cannot be longer than {} characters",
            MAX_TITLE_LENGTH
        ))));
    }
    Ok(())
}

pub(crate) fn validate_description(description: Option<&str>) -> Result<()> {
    if let Some(description) = description {
        if description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Description cannot be longer than {} characters",
                MAX_DESCRIPTION_LENGTH
            ))));
        }
    }
    Ok(())
}

pub(crate) fn validate_reference(value: &str, field: &str) -> Result<()> {
    if Uuid::parse_str(value).is_err() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} must be a UUID",
            field
        ))));
    }
    Ok(())
}
