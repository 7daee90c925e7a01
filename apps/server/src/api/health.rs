use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::main_lib::AppState;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Alive")))]
pub(crate) async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database file backing the pool is reachable.
#[utoipa::path(get, path = "/api/v1/readyz", responses(
    (status = 200, description = "Ready"),
    (status = 503, description = "Database unavailable")
))]
pub(crate) async fn readyz(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, StatusCode> {
    if std::path::Path::new(&state.db_path).exists() {
        Ok("ok")
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
