//! Shared setup for the HTTP integration tests: each test gets a router
//! over its own temporary database, with the admin user seeded.
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use finbook_server::api::app_router;
use finbook_server::build_state;
use finbook_server::config::Config;

pub const ADMIN_MAIL: &str = "admin@finbook.test";
pub const ADMIN_PASSWORD: &str = "admin-password";

pub struct TestApp {
    pub router: Router,
    // Keeps the database file alive for the duration of the test.
    _tmp: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        secret_key: b"integration-test-secret-key-32b!".to_vec(),
        token_ttl_secs: 3600,
        cors_allow_origins: vec!["*".to_string()],
        request_timeout_ms: 30_000,
        admin_mail: Some(ADMIN_MAIL.to_string()),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
    };
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        _tmp: tmp,
    }
}

/// Sends one request and returns the status plus the parsed JSON body
/// (`Null` for empty bodies, a plain string for non-JSON ones).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub async fn login(router: &Router, mail: &str, password: &str) -> String {
    let (status, json) = send(
        router,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({ "mail": mail, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["accessToken"].as_str().unwrap().to_string()
}

/// Registers a user and returns its access token.
pub async fn register_and_login(router: &Router, mail: &str, password: &str) -> String {
    let (status, _) = send(
        router,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "mail": mail,
            "fullName": "Test User",
            "password": password,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    login(router, mail, password).await
}

pub async fn admin_token(router: &Router) -> String {
    login(router, ADMIN_MAIL, ADMIN_PASSWORD).await
}

/// Seeds one currency and one operation category, returning their ids.
pub async fn seed_classifier(router: &Router) -> (String, String) {
    let admin = admin_token(router).await;
    let (status, currency) = send(
        router,
        Method::POST,
        "/api/v1/classifier/currencies",
        Some(&admin),
        Some(serde_json::json!({ "title": "EUR", "description": "Euro" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, category) = send(
        router,
        Method::POST,
        "/api/v1/classifier/operation-categories",
        Some(&admin),
        Some(serde_json::json!({ "title": "Groceries" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (
        currency["id"].as_str().unwrap().to_string(),
        category["id"].as_str().unwrap().to_string(),
    )
}

pub async fn create_account(
    router: &Router,
    token: &str,
    title: &str,
    currency_id: &str,
) -> serde_json::Value {
    let (status, account) = send(
        router,
        Method::POST,
        "/api/v1/accounts",
        Some(token),
        Some(serde_json::json!({
            "title": title,
            "description": "Integration test account",
            "accountType": "CASH",
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    account
}

pub async fn create_operation(
    router: &Router,
    token: &str,
    account_id: &str,
    value: f64,
    date: i64,
    currency_id: &str,
    category_id: &str,
) -> serde_json::Value {
    let (status, operation) = send(
        router,
        Method::POST,
        &format!("/api/v1/accounts/{account_id}/operations"),
        Some(token),
        Some(serde_json::json!({
            "date": date,
            "description": "Integration test operation",
            "categoryId": category_id,
            "value": value,
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    operation
}

/// Reads the account's current balance through the owner's eyes.
pub async fn account_balance(router: &Router, token: &str, account_id: &str) -> serde_json::Value {
    let (status, account) = send(
        router,
        Method::GET,
        &format!("/api/v1/accounts/{account_id}"),
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    account["balance"].clone()
}
