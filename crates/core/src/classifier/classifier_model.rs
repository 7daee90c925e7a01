//! Classifier domain models: the reference vocabulary operations point at.
//!
//! Accounts and operations store classifier ids as opaque references; they
//! are not foreign-key-validated against these tables.

use serde::{Deserialize, Serialize};

use crate::accounts::{validate_description, validate_title};
use crate::errors::Result;
use crate::time::Timestamps;

/// A currency entry, e.g. "USD".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Input model for creating a currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub title: String,
    pub description: Option<String>,
}

impl NewCurrency {
    /// Validates the new currency data.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_description(self.description.as_deref())?;
        Ok(())
    }
}

/// A category operations can be filed under, e.g. "Groceries".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationCategory {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Input model for creating an operation category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOperationCategory {
    pub title: String,
}

impl NewOperationCategory {
    /// Validates the new category data.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}
