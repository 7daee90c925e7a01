use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use finbook_core::classifier::{Currency, NewCurrency, NewOperationCategory, OperationCategory};
use finbook_core::paging::Page;

use crate::api::shared::PageParams;
use crate::auth::AuthContext;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

fn require_classifier_manager(ctx: &AuthContext) -> Result<(), ApiError> {
    if !ctx.role.can_manage_classifier() {
        return Err(ApiError::Forbidden("Manager or administrator role required"));
    }
    Ok(())
}

/// Create a currency entry. MANAGER or ADMIN only.
async fn create_currency(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_currency): Json<NewCurrency>,
) -> ApiResult<(StatusCode, Json<Currency>)> {
    require_classifier_manager(&ctx)?;
    let currency = state.classifier_service.create_currency(new_currency).await?;
    Ok((StatusCode::CREATED, Json(currency)))
}

/// List currencies. Any authenticated user.
async fn get_currencies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<Currency>>> {
    let page = state
        .classifier_service
        .get_currencies_page(&params.into_query())?;
    Ok(Json(page))
}

/// Create an operation category. MANAGER or ADMIN only.
async fn create_category(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_category): Json<NewOperationCategory>,
) -> ApiResult<(StatusCode, Json<OperationCategory>)> {
    require_classifier_manager(&ctx)?;
    let category = state.classifier_service.create_category(new_category).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List operation categories. Any authenticated user.
async fn get_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<OperationCategory>>> {
    let page = state
        .classifier_service
        .get_categories_page(&params.into_query())?;
    Ok(Json(page))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/classifier/currencies",
            get(get_currencies).post(create_currency),
        )
        .route(
            "/classifier/operation-categories",
            get(get_categories).post(create_category),
        )
}
