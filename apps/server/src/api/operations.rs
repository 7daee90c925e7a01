use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use finbook_core::operations::{NewOperation, Operation, OperationUpdate};
use finbook_core::paging::Page;

use crate::api::shared::PageParams;
use crate::auth::AuthContext;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Record an operation in one of the calling user's accounts. The account
/// balance is recomputed before the response is produced.
#[utoipa::path(post, path = "/api/v1/accounts/{id}/operations",
    request_body = crate::models::NewOperation,
    responses((status = 201, body = crate::models::Operation)))]
pub(crate) async fn create_operation(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path(account_id): Path<String>,
    Json(new_operation): Json<NewOperation>,
) -> ApiResult<(StatusCode, Json<Operation>)> {
    let operation = state
        .operation_service
        .create_operation(&account_id, &ctx.user_id, new_operation)
        .await?;
    Ok((StatusCode::CREATED, Json(operation)))
}

/// List an account's operations, most recent operation date first.
#[utoipa::path(get, path = "/api/v1/accounts/{id}/operations",
    responses((status = 200, description = "Page of operations, date descending")))]
pub(crate) async fn get_operations(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path(account_id): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<Operation>>> {
    let page = state
        .operation_service
        .get_operations_page(&account_id, &ctx.user_id, &params.into_query())?;
    Ok(Json(page))
}

/// Replace an operation's fields, guarded by the version token in the path.
#[utoipa::path(put,
    path = "/api/v1/accounts/{id}/operations/{operation_id}/dt_update/{dt_update}",
    request_body = crate::models::OperationUpdate,
    responses((status = 200, body = crate::models::Operation)))]
pub(crate) async fn update_operation(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path((account_id, operation_id, dt_update)): Path<(String, String, i64)>,
    Json(operation_update): Json<OperationUpdate>,
) -> ApiResult<Json<Operation>> {
    let operation = state
        .operation_service
        .update_operation(
            &account_id,
            &operation_id,
            &ctx.user_id,
            operation_update,
            dt_update,
        )
        .await?;
    Ok(Json(operation))
}

/// Delete an operation, guarded by the version token in the path.
#[utoipa::path(delete,
    path = "/api/v1/accounts/{id}/operations/{operation_id}/dt_update/{dt_update}",
    responses((status = 204, description = "Deleted")))]
pub(crate) async fn delete_operation(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path((account_id, operation_id, dt_update)): Path<(String, String, i64)>,
) -> ApiResult<StatusCode> {
    state
        .operation_service
        .delete_operation(&account_id, &operation_id, &ctx.user_id, dt_update)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/accounts/{id}/operations",
            get(get_operations).post(create_operation),
        )
        .route(
            "/accounts/{id}/operations/{operation_id}/dt_update/{dt_update}",
            put(update_operation).delete(delete_operation),
        )
}
