//! HTTP surface: per-domain routers assembled under `/api/v1`.

pub mod accounts;
pub mod admin;
pub mod auth;
pub mod classifier;
pub mod health;
pub mod operations;
pub mod shared;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::auth::{require_admin, require_jwt};
use crate::config::Config;
use crate::main_lib::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Finbook API",
        description = "Personal finance accounting: accounts, operations and derived balances."
    ),
    paths(
        health::healthz,
        health::readyz,
        accounts::get_accounts,
        accounts::create_account,
        accounts::get_account,
        accounts::update_account,
        operations::get_operations,
        operations::create_operation,
        operations::update_operation,
        operations::delete_operation,
    ),
    components(schemas(
        crate::models::Account,
        crate::models::NewAccount,
        crate::models::AccountUpdate,
        crate::models::Operation,
        crate::models::NewOperation,
        crate::models::OperationUpdate,
        crate::models::User,
        crate::models::RegisterRequest,
        crate::models::LoginRequest,
        crate::models::TokenResponse,
        crate::models::Currency,
        crate::models::NewCurrency,
        crate::models::OperationCategory,
        crate::models::NewOperationCategory,
        crate::models::AuditRecord,
        crate::models::ErrorResponse,
    )),
    tags((name = "finbook"))
)]
struct ApiDoc;

/// Serve the OpenAPI document.
async fn get_openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the full application router.
///
/// Three tiers: public (health, auth, spec), authenticated (own accounts,
/// operations, classifier, profile) and admin (override, user management,
/// audit). The admin tier checks the role after the token, so an expired
/// token yields 401 and a non-admin one 403.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let public = Router::new()
        .merge(health::router())
        .merge(auth::router())
        .route("/openapi.json", get(get_openapi_spec));

    let protected = Router::new()
        .merge(users::router())
        .merge(accounts::router())
        .merge(operations::router())
        .merge(classifier::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let admin = admin::router()
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .merge(public)
        .merge(protected)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_millis(
            config.request_timeout_ms,
        )))
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    Router::new().nest("/api/v1", api).with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if config.cors_allow_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allow_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
