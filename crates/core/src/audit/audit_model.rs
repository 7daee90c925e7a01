//! Audit domain models.

use serde::{Deserialize, Serialize};

/// Kind of entity an audit record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EssenceType {
    User,
    Account,
    Operation,
}

impl EssenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EssenceType::User => "USER",
            EssenceType::Account => "ACCOUNT",
            EssenceType::Operation => "OPERATION",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(EssenceType::User),
            "ACCOUNT" => Some(EssenceType::Account),
            "OPERATION" => Some(EssenceType::Operation),
            _ => None,
        }
    }
}

/// One recorded admin action. Append-only: audit records are never updated
/// or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: String,
    /// The admin who acted
    pub user_id: String,
    /// Human-readable description of the action
    pub text: String,
    pub essence_type: EssenceType,
    /// Id of the entity the action touched
    pub essence_id: String,
    pub created_at: i64,
}

/// Input model for appending an audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuditRecord {
    pub user_id: String,
    pub text: String,
    pub essence_type: EssenceType,
    pub essence_id: String,
}

impl NewAuditRecord {
    pub fn new(user_id: &str, text: String, essence_type: EssenceType, essence_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            text,
            essence_type,
            essence_id: essence_id.to_string(),
        }
    }
}
