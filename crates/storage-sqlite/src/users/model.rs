//! Database model for users.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use finbook_core::time::{now_millis, Timestamps};
use finbook_core::users::{NewUser, User, UserRole, UserStatus};

/// Database model for users
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub mail: String,
    pub full_name: String,
    pub role: String,
    pub status: String,
    pub password_hash: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserDB {
    /// Builds a fresh row with a generated id.
    pub fn from_new(new_user: NewUser) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            mail: new_user.mail,
            full_name: new_user.full_name,
            role: new_user.role.as_str().to_string(),
            status: new_user.status.as_str().to_string(),
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

// Conversion implementations
impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        let role = UserRole::from_str(&db.role).unwrap_or_else(|| {
            log::warn!(
                "Unknown role '{}' on user '{}', reading as {}",
                db.role,
                db.id,
                UserRole::default().as_str()
            );
            UserRole::default()
        });
        let status = UserStatus::from_str(&db.status).unwrap_or_else(|| {
            log::warn!(
                "Unknown status '{}' on user '{}', reading as {}",
                db.status,
                db.id,
                UserStatus::default().as_str()
            );
            UserStatus::default()
        });

        Self {
            id: db.id,
            mail: db.mail,
            full_name: db.full_name,
            role,
            status,
            password_hash: db.password_hash,
            timestamps: Timestamps {
                created_at: db.created_at,
                updated_at: db.updated_at,
            },
        }
    }
}
