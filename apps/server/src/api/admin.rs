use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use finbook_core::audit::AuditRecord;
use finbook_core::operations::{Operation, OperationUpdate};
use finbook_core::paging::Page;
use finbook_core::users::{NewUser, User, UserRole, UserStatus, UserUpdate};

use crate::api::shared::PageParams;
use crate::auth::{hash_password, validate_password, AuthContext};
use crate::error::ApiResult;
use crate::main_lib::AppState;

// === Operation override ===

/// List any account's operations, regardless of owner.
async fn get_operations(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<Operation>>> {
    let page = state
        .operation_service
        .get_operations_page_by_admin(&account_id, &params.into_query())?;
    Ok(Json(page))
}

/// Update an operation in any account. Version-guarded and audited.
async fn update_operation(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path((account_id, operation_id, dt_update)): Path<(String, String, i64)>,
    Json(operation_update): Json<OperationUpdate>,
) -> ApiResult<Json<Operation>> {
    let operation = state
        .operation_service
        .update_operation_by_admin(
            &ctx.user_id,
            &account_id,
            &operation_id,
            operation_update,
            dt_update,
        )
        .await?;
    Ok(Json(operation))
}

/// Delete an operation from any account. Version-guarded and audited.
async fn delete_operation(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path((account_id, operation_id, dt_update)): Path<(String, String, i64)>,
) -> ApiResult<StatusCode> {
    state
        .operation_service
        .delete_operation_by_admin(&ctx.user_id, &account_id, &operation_id, dt_update)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// === User management ===

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminNewUserRequest {
    mail: String,
    full_name: String,
    password: String,
    #[serde(default)]
    role: UserRole,
    #[serde(default)]
    status: UserStatus,
}

/// Create a user with an explicit role and status. Audited.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(body): Json<AdminNewUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    validate_password(&body.password)?;
    let password_hash = hash_password(&body.password)?;
    let user = state
        .user_service
        .create_user_by_admin(
            &ctx.user_id,
            NewUser {
                mail: body.mail,
                full_name: body.full_name,
                role: body.role,
                status: body.status,
                password_hash,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users in creation order.
async fn get_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<User>>> {
    let page = state.user_service.get_users_page(&params.into_query())?;
    Ok(Json(page))
}

/// Get any user by id.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&user_id)?;
    Ok(Json(user))
}

/// Update a user's profile, guarded by the version token in the path.
/// Audited.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Path((user_id, dt_update)): Path<(String, i64)>,
    Json(user_update): Json<UserUpdate>,
) -> ApiResult<Json<User>> {
    let user = state
        .user_service
        .update_user_by_admin(&ctx.user_id, &user_id, user_update, dt_update)
        .await?;
    Ok(Json(user))
}

// === Audit trail ===

/// List audit records, most recent first.
async fn get_audit(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<AuditRecord>>> {
    let page = state.audit_sink.list_page(&params.into_query())?;
    Ok(Json(page))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/operations/account/{account_id}", get(get_operations))
        .route(
            "/admin/operations/account/{account_id}/operation/{operation_id}/dt_update/{dt_update}",
            put(update_operation).delete(delete_operation),
        )
        .route("/admin/users", get(get_users).post(create_user))
        .route("/admin/users/{id}", get(get_user))
        .route("/admin/users/{id}/dt_update/{dt_update}", put(update_user))
        .route("/admin/audit", get(get_audit))
}
