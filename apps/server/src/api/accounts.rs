use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use finbook_core::accounts::{Account, AccountUpdate, NewAccount};
use finbook_core::paging::Page;

use crate::api::shared::PageParams;
use crate::auth::AuthContext;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Create an account for the calling user.
#[utoipa::path(post, path = "/api/v1/accounts", request_body = crate::models::NewAccount,
    responses((status = 201, body = crate::models::Account)))]
pub(crate) async fn create_account(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_account): Json<NewAccount>,
) -> ApiResult<(StatusCode, Json<Account>)> {
    let account = state
        .account_service
        .create_account(&ctx.user_id, new_account)
        .await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// List the calling user's accounts.
#[utoipa::path(get, path = "/api/v1/accounts",
    responses((status = 200, description = "Page of accounts")))]
pub(crate) async fn get_accounts(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<Account>>> {
    let page = state
        .account_service
        .get_accounts_page(&ctx.user_id, &params.into_query())?;
    Ok(Json(page))
}

/// Get one of the calling user's accounts.
#[utoipa::path(get, path = "/api/v1/accounts/{id}",
    responses((status = 200, body = crate::models::Account)))]
pub(crate) async fn get_account(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path(account_id): Path<String>,
) -> ApiResult<Json<Account>> {
    let account = state.account_service.get_account(&account_id, &ctx.user_id)?;
    Ok(Json(account))
}

/// Update an account, guarded by the version token in the path.
#[utoipa::path(put, path = "/api/v1/accounts/{id}/dt_update/{dt_update}",
    request_body = crate::models::AccountUpdate,
    responses((status = 200, body = crate::models::Account)))]
pub(crate) async fn update_account(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path((account_id, dt_update)): Path<(String, i64)>,
    Json(account_update): Json<AccountUpdate>,
) -> ApiResult<Json<Account>> {
    let account = state
        .account_service
        .update_account(&account_id, &ctx.user_id, account_update, dt_update)
        .await?;
    Ok(Json(account))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts", get(get_accounts).post(create_account))
        .route("/accounts/{id}", get(get_account))
        .route("/accounts/{id}/dt_update/{dt_update}", put(update_account))
}
