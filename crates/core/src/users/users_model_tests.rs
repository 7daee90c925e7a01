//! Tests for the user domain models.

#[cfg(test)]
mod tests {
    use crate::time::Timestamps;
    use crate::users::{NewUser, User, UserRole, UserStatus};

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"USER\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Manager).unwrap(),
            "\"MANAGER\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"ADMIN\""
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&UserStatus::WaitingActivation).unwrap(),
            "\"WAITING_ACTIVATION\""
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::Activated).unwrap(),
            "\"ACTIVATED\""
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::Deactivated).unwrap(),
            "\"DEACTIVATED\""
        );
    }

    #[test]
    fn test_classifier_management_is_manager_and_admin_only() {
        assert!(!UserRole::User.can_manage_classifier());
        assert!(UserRole::Manager.can_manage_classifier());
        assert!(UserRole::Admin.can_manage_classifier());
    }

    #[test]
    fn test_password_hash_never_serializes() {
        let user = User {
            id: "user-1".to_string(),
            mail: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            role: UserRole::User,
            status: UserStatus::Activated,
            password_hash: "$argon2id$secret".to_string(),
            timestamps: Timestamps {
                created_at: 1_700_000_000_000,
                updated_at: 1_700_000_000_000,
            },
        };

        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["mail"], "ada@example.com");
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["role"], "USER");
        assert_eq!(json["status"], "ACTIVATED");
    }

    #[test]
    fn test_user_deserializes_without_password_hash() {
        let json = r#"{
            "id": "user-1",
            "mail": "ada@example.com",
            "fullName": "Ada Lovelace",
            "role": "ADMIN",
            "status": "DEACTIVATED",
            "createdAt": 1700000000000,
            "updatedAt": 1700000000000
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.status, UserStatus::Deactivated);
        assert!(user.password_hash.is_empty());
    }

    #[test]
    fn test_mail_validation() {
        let mut input = NewUser {
            mail: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            role: UserRole::User,
            status: UserStatus::Activated,
            password_hash: "$argon2id$stub".to_string(),
        };
        assert!(input.validate().is_ok());

        input.mail = "  spaced@example.com  ".to_string();
        assert!(input.validate().is_ok());

        input.mail = "no-at-sign".to_string();
        assert!(input.validate().is_err());

        input.mail = format!("{}@example.com", "a".repeat(250));
        assert!(input.validate().is_err());
    }
}
