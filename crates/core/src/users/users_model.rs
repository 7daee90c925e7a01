//! User domain models.

use serde::{Deserialize, Serialize};

use crate::accounts::validate_title;
use crate::time::Timestamps;
use crate::{errors::ValidationError, Error, Result};

/// Authorization role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Manager,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(UserRole::User),
            "MANAGER" => Some(UserRole::Manager),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Classifier entries may be created by managers and admins.
    pub fn can_manage_classifier(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Admin)
    }
}

/// Lifecycle status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    WaitingActivation,
    #[default]
    Activated,
    Deactivated,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::WaitingActivation => "WAITING_ACTIVATION",
            UserStatus::Activated => "ACTIVATED",
            UserStatus::Deactivated => "DEACTIVATED",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "WAITING_ACTIVATION" => Some(UserStatus::WaitingActivation),
            "ACTIVATED" => Some(UserStatus::Activated),
            "DEACTIVATED" => Some(UserStatus::Deactivated),
            _ => None,
        }
    }
}

/// Domain model representing a user of the system.
///
/// The password hash stays internal: it is read for login verification but
/// never serialized into a response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub mail: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Input model for creating a user, either through self registration or by
/// an admin. The password arrives already hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub mail: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub password_hash: String,
}

impl NewUser {
    /// Validates the new user data.
    pub fn validate(&self) -> Result<()> {
        validate_mail(&self.mail)?;
        validate_title(&self.full_name)?;
        if self.password_hash.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Password hash cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for the admin user update. The password is not changed
/// through this path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub mail: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl UserUpdate {
    /// Validates the user update data.
    pub fn validate(&self) -> Result<()> {
        validate_mail(&self.mail)?;
        validate_title(&self.full_name)?;
        Ok(())
    }
}

pub(crate) fn validate_mail(mail: &str) -> Result<()> {
    let mail = mail.trim();
    if mail.is_empty() || !mail.contains('@') || mail.len() > 255 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Mail address is not valid".to_string(),
        )));
    }
    Ok(())
}
