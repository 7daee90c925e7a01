use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;

use finbook_core::users::{NewUser, User, UserRole, UserStatus};

use crate::auth::{hash_password, validate_password, verify_password};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    mail: String,
    full_name: String,
    password: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    mail: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
    token_type: &'static str,
    expires_at: i64,
}

/// Self registration. New users come out activated with the USER role.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    validate_password(&body.password)?;
    let password_hash = hash_password(&body.password)?;
    let user = state
        .user_service
        .register(NewUser {
            mail: body.mail,
            full_name: body.full_name,
            role: UserRole::User,
            status: UserStatus::Activated,
            password_hash,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchanges mail and password for an access token.
///
/// Unknown mail, wrong password and a deactivated user all produce the
/// same 401, so the response does not reveal which mails are registered.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let user = state
        .user_service
        .find_by_mail(&body.mail)?
        .filter(|user| user.status == UserStatus::Activated)
        .filter(|user| verify_password(&user.password_hash, &body.password))
        .ok_or(ApiError::Unauthorized("Invalid credentials"))?;

    let (access_token, expires_at) = state.auth.issue_token(&user)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer",
        expires_at,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}
