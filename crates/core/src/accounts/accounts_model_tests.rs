//! Tests for the account domain models.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::accounts::{Account, AccountType, NewAccount};
    use crate::errors::Error;
    use crate::time::Timestamps;

    #[test]
    fn test_account_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AccountType::Cash).unwrap(),
            "\"CASH\""
        );
        assert_eq!(
            serde_json::to_string(&AccountType::BankAccount).unwrap(),
            "\"BANK_ACCOUNT\""
        );
        assert_eq!(
            serde_json::to_string(&AccountType::BankDeposit).unwrap(),
            "\"BANK_DEPOSIT\""
        );
    }

    #[test]
    fn test_account_type_deserialization() {
        assert_eq!(
            serde_json::from_str::<AccountType>("\"CASH\"").unwrap(),
            AccountType::Cash
        );
        assert_eq!(
            serde_json::from_str::<AccountType>("\"BANK_ACCOUNT\"").unwrap(),
            AccountType::BankAccount
        );
        assert!(serde_json::from_str::<AccountType>("\"SAVINGS\"").is_err());
    }

    /// The storage column strings and the wire strings are the same
    /// vocabulary.
    #[test]
    fn test_account_type_column_strings_round_trip() {
        for account_type in [
            AccountType::Cash,
            AccountType::BankAccount,
            AccountType::BankDeposit,
        ] {
            assert_eq!(
                AccountType::from_str(account_type.as_str()),
                Some(account_type)
            );
            assert_eq!(
                serde_json::to_string(&account_type).unwrap(),
                format!("\"{}\"", account_type.as_str())
            );
        }
    }

    #[test]
    fn test_account_serializes_camel_case_with_flat_timestamps() {
        let account = Account {
            id: "acc-1".to_string(),
            owner_id: "user-1".to_string(),
            title: "Checking".to_string(),
            description: None,
            account_type: AccountType::BankAccount,
            currency_id: "cur-1".to_string(),
            balance: dec!(849.5),
            timestamps: Timestamps {
                created_at: 1_700_000_000_000,
                updated_at: 1_700_000_000_001,
            },
        };

        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["ownerId"], "user-1");
        assert_eq!(json["accountType"], "BANK_ACCOUNT");
        assert_eq!(json["currencyId"], "cur-1");
        // Decimal goes over the wire as a plain JSON number.
        assert_eq!(json["balance"], serde_json::json!(849.5));
        // The timestamps flatten into the object itself.
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(json["updatedAt"], 1_700_000_000_001_i64);
        assert!(json.get("timestamps").is_none());
    }

    #[test]
    fn test_title_and_description_length_limits() {
        let input = NewAccount {
            title: "t".repeat(255),
            description: Some("d".repeat(500)),
            account_type: AccountType::Cash,
            currency_id: uuid::Uuid::new_v4().to_string(),
        };
        assert!(input.validate().is_ok());

        let mut too_long_title = input.clone();
        too_long_title.title = "t".repeat(256);
        assert!(matches!(
            too_long_title.validate(),
            Err(Error::Validation(_))
        ));

        let mut too_long_description = input;
        too_long_description.description = Some("d".repeat(501));
        assert!(matches!(
            too_long_description.validate(),
            Err(Error::Validation(_))
        ));
    }
}
