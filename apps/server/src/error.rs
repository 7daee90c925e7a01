//! HTTP error mapping.
//!
//! Handlers return [`ApiResult`] and use `?` on service calls; the
//! [`IntoResponse`] impl turns every error into a JSON body of the shape
//! `{"code": "...", "message": "..."}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use finbook_core::errors::{DatabaseError, Error};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// A domain error surfaced by the core services.
    Domain(Error),
    /// The request carries no usable credentials.
    Unauthorized(&'static str),
    /// The caller is authenticated but lacks the required role.
    Forbidden(&'static str),
    /// Anything the caller cannot act on. Logged, reported generically.
    Internal(anyhow::Error),
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError::Domain(error)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::Internal(error)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Domain(error) => domain_parts(error),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message.to_string())
            }
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", message.to_string())
            }
            ApiError::Internal(error) => {
                tracing::error!("Internal error: {error:#}");
                internal_parts()
            }
        };
        (status, Json(ErrorBody { code, message })).into_response()
    }
}

fn domain_parts(error: Error) -> (StatusCode, &'static str, String) {
    match &error {
        Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", error.to_string()),
        Error::DuplicateTitle(_) => (StatusCode::CONFLICT, "DUPLICATE_TITLE", error.to_string()),
        Error::DuplicateMail(_) => (StatusCode::CONFLICT, "DUPLICATE_MAIL", error.to_string()),
        Error::VersionConflict => (StatusCode::CONFLICT, "VERSION_CONFLICT", error.to_string()),
        Error::InvalidPageParameters(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_PAGE_PARAMETERS", error.to_string())
        }
        Error::Validation(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", error.to_string()),
        Error::Database(DatabaseError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", error.to_string())
        }
        Error::Database(DatabaseError::UniqueViolation(_)) => {
            (StatusCode::CONFLICT, "CONFLICT", error.to_string())
        }
        Error::Database(inner) => {
            tracing::error!("Database error: {inner}");
            internal_parts()
        }
        Error::Unexpected(message) => {
            tracing::error!("Unexpected error: {message}");
            internal_parts()
        }
    }
}

fn internal_parts() -> (StatusCode, &'static str, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", "Internal server error".to_string())
}
