//! Token issuing, password hashing and the authentication middleware.

use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use finbook_core::errors::{Error, ValidationError};
use finbook_core::time::now_millis;
use finbook_core::users::{User, UserRole};

use crate::error::ApiError;
use crate::main_lib::AppState;

const MIN_PASSWORD_CHARS: usize = 8;

/// Claims carried inside an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Role at issue time.
    pub role: String,
    /// Issued at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

/// Issues and validates HS256 access tokens.
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: i64,
}

impl AuthManager {
    pub fn new(secret_key: &[u8], token_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret_key),
            decoding_key: DecodingKey::from_secret(secret_key),
            token_ttl_secs,
        }
    }

    /// Signs a token for the user. Returns the token and its expiry,
    /// seconds since epoch.
    pub fn issue_token(&self, user: &User) -> Result<(String, i64), ApiError> {
        let iat = now_millis() / 1000;
        let exp = iat + self.token_ttl_secs;
        let claims = Claims {
            sub: user.id.clone(),
            role: user.role.as_str().to_string(),
            iat,
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to sign token: {e}")))?;
        Ok((token, exp))
    }

    /// Checks the signature and expiry, returning the embedded claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token"))
    }
}

/// Rejects passwords that are too short to bother hashing.
pub fn validate_password(password: &str) -> Result<(), Error> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters"
        ))));
    }
    Ok(())
}

/// Hashes a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored Argon2 hash. An unparseable stored
/// hash counts as a mismatch.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Identity of the authenticated caller, available to handlers through
/// request extensions once [`require_jwt`] has run.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub user_id: String,
    pub role: UserRole,
}

/// Middleware requiring a valid bearer token. Inserts an [`AuthContext`]
/// for downstream handlers.
pub async fn require_jwt(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token =
        bearer_token(&request).ok_or(ApiError::Unauthorized("Missing bearer token"))?;
    let claims = state.auth.validate_token(token)?;
    let role = UserRole::from_str(&claims.role).unwrap_or_default();
    request.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
        role,
    });
    Ok(next.run(request).await)
}

/// Middleware requiring the ADMIN role. Layered inside [`require_jwt`].
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let is_admin = request
        .extensions()
        .get::<AuthContext>()
        .map(|ctx| ctx.role == UserRole::Admin)
        .unwrap_or(false);
    if !is_admin {
        return Err(ApiError::Forbidden("Administrator role required"));
    }
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
