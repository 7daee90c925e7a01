use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use finbook_core::users::User;

use crate::auth::AuthContext;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Returns the calling user's own profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&ctx.user_id)?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users/me", get(get_me))
}
