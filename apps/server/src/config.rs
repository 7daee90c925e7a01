//! Server configuration loaded from the environment.

use anyhow::{bail, Context};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

const MIN_SECRET_KEY_BYTES: usize = 32;

/// Runtime configuration. Every field can be set through a `FINBOOK_*`
/// environment variable; a `.env` file in the working directory is honored.
#[derive(Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// SQLite database file, or a directory to place `finbook.db` in.
    pub db_path: String,
    /// HMAC key for signing access tokens.
    pub secret_key: Vec<u8>,
    /// Access token lifetime in seconds.
    pub token_ttl_secs: i64,
    /// Allowed CORS origins. `*` allows any origin.
    pub cors_allow_origins: Vec<String>,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Mail of the admin user seeded on first start.
    pub admin_mail: Option<String>,
    /// Password of the seeded admin user.
    pub admin_password: Option<String>,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `FINBOOK_SECRET_KEY` is the only required variable; everything else
    /// falls back to a sensible default.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr =
            std::env::var("FINBOOK_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let db_path =
            std::env::var("FINBOOK_DB_PATH").unwrap_or_else(|_| "data/finbook.db".to_string());

        let secret_key = std::env::var("FINBOOK_SECRET_KEY")
            .context("FINBOOK_SECRET_KEY is not set")
            .and_then(|raw| decode_secret_key(&raw))?;

        let token_ttl_secs = std::env::var("FINBOOK_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .context("FINBOOK_TOKEN_TTL_SECS must be an integer number of seconds")?;

        let cors_allow_origins = std::env::var("FINBOOK_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let request_timeout_ms = std::env::var("FINBOOK_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()
            .context("FINBOOK_REQUEST_TIMEOUT_MS must be an integer number of milliseconds")?;

        let admin_mail = std::env::var("FINBOOK_ADMIN_MAIL").ok();
        let admin_password = std::env::var("FINBOOK_ADMIN_PASSWORD").ok();

        Ok(Self {
            listen_addr,
            db_path,
            secret_key,
            token_ttl_secs,
            cors_allow_origins,
            request_timeout_ms,
            admin_mail,
            admin_password,
        })
    }
}

/// Accepts the signing key either base64-encoded or as a raw string.
fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    if let Ok(bytes) = BASE64.decode(raw) {
        if bytes.len() >= MIN_SECRET_KEY_BYTES {
            return Ok(bytes);
        }
    }
    if raw.len() >= MIN_SECRET_KEY_BYTES {
        return Ok(raw.as_bytes().to_vec());
    }
    bail!("FINBOOK_SECRET_KEY must decode to at least {MIN_SECRET_KEY_BYTES} bytes");
}
