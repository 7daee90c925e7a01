//! Wire-shape mirrors of the domain models, used to build the OpenAPI
//! document served at `/api/v1/openapi.json`.
//!
//! Handlers serialize the core types directly; these structs only describe
//! the resulting JSON. Amount fields appear as numbers (`serde-float`),
//! instants and version tokens as epoch milliseconds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    /// One of `CASH`, `BANK_ACCOUNT`, `BANK_DEPOSIT`
    pub account_type: String,
    pub currency_id: String,
    /// Sum of the account's operation values, maintained by the server
    pub balance: Decimal,
    pub created_at: i64,
    /// Version token echoed back in guarded updates
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub title: String,
    pub description: Option<String>,
    pub account_type: String,
    pub currency_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub title: String,
    pub description: Option<String>,
    pub account_type: String,
    pub currency_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    pub account_id: String,
    /// When the movement happened, epoch milliseconds
    pub date: i64,
    pub description: Option<String>,
    pub category_id: String,
    /// Signed amount: positive income, negative expense
    pub value: Decimal,
    pub currency_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewOperation {
    pub date: i64,
    pub description: Option<String>,
    pub category_id: String,
    pub value: Decimal,
    pub currency_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OperationUpdate {
    pub date: i64,
    pub description: Option<String>,
    pub category_id: String,
    pub value: Decimal,
    pub currency_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub mail: String,
    pub full_name: String,
    /// One of `USER`, `MANAGER`, `ADMIN`
    pub role: String,
    /// One of `WAITING_ACTIVATION`, `ACTIVATED`, `DEACTIVATED`
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub mail: String,
    pub full_name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub mail: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Expiry, seconds since epoch
    pub expires_at: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OperationCategory {
    pub id: String,
    pub title: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewOperationCategory {
    pub title: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: String,
    /// The acting user
    pub user_id: String,
    pub text: String,
    /// One of `USER`, `ACCOUNT`, `OPERATION`
    pub essence_type: String,
    pub essence_id: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
