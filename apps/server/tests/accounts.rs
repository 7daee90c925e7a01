mod common;

use axum::http::{Method, StatusCode};

use common::{create_account, register_and_login, seed_classifier, send, spawn_app};

#[tokio::test]
async fn test_create_and_list_accounts() {
    let app = spawn_app().await;
    let (currency_id, _) = seed_classifier(&app.router).await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    let checking = create_account(&app.router, &token, "Checking", &currency_id).await;
    assert_eq!(checking["title"], "Checking");
    assert_eq!(checking["accountType"], "CASH");
    assert_eq!(checking["balance"], serde_json::json!(0.0));

    create_account(&app.router, &token, "Savings", &currency_id).await;

    let (status, page) = send(&app.router, Method::GET, "/api/v1/accounts", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 2);
    let mut titles: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|account| account["title"].as_str().unwrap())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Checking", "Savings"]);
}

#[tokio::test]
async fn test_duplicate_title_is_per_owner() {
    let app = spawn_app().await;
    let (currency_id, _) = seed_classifier(&app.router).await;
    let alice = register_and_login(&app.router, "alice@example.com", "alice-password").await;
    let bob = register_and_login(&app.router, "bob@example.com", "bob-password").await;

    create_account(&app.router, &alice, "Checking", &currency_id).await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/accounts",
        Some(&alice),
        Some(serde_json::json!({
            "title": "Checking",
            "description": null,
            "accountType": "CASH",
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_TITLE");

    // The same title under another owner is fine.
    create_account(&app.router, &bob, "Checking", &currency_id).await;
}

#[tokio::test]
async fn test_foreign_account_reads_as_not_found() {
    let app = spawn_app().await;
    let (currency_id, _) = seed_classifier(&app.router).await;
    let alice = register_and_login(&app.router, "alice@example.com", "alice-password").await;
    let bob = register_and_login(&app.router, "bob@example.com", "bob-password").await;

    let account = create_account(&app.router, &alice, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();

    let (status, body) = send(
        &app.router,
        Method::GET,
        &format!("/api/v1/accounts/{account_id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_account_is_version_guarded() {
    let app = spawn_app().await;
    let (currency_id, _) = seed_classifier(&app.router).await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    let account = create_account(&app.router, &token, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();
    let version = account["updatedAt"].as_i64().unwrap();

    let update = serde_json::json!({
        "title": "Main checking",
        "description": "Renamed",
        "accountType": "BANK_ACCOUNT",
        "currencyId": currency_id,
    });

    let (status, updated) = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/accounts/{account_id}/dt_update/{version}"),
        Some(&token),
        Some(update.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Main checking");
    assert_eq!(updated["accountType"], "BANK_ACCOUNT");
    assert_eq!(updated["balance"], serde_json::json!(0.0));

    // A token that was never current is always stale.
    let (status, body) = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/accounts/{account_id}/dt_update/{}", version - 1),
        Some(&token),
        Some(update),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "VERSION_CONFLICT");
}

#[tokio::test]
async fn test_rename_onto_existing_title_conflicts() {
    let app = spawn_app().await;
    let (currency_id, _) = seed_classifier(&app.router).await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    create_account(&app.router, &token, "Checking", &currency_id).await;
    let savings = create_account(&app.router, &token, "Savings", &currency_id).await;
    let savings_id = savings["id"].as_str().unwrap();
    let version = savings["updatedAt"].as_i64().unwrap();

    let (status, body) = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/accounts/{savings_id}/dt_update/{version}"),
        Some(&token),
        Some(serde_json::json!({
            "title": "Checking",
            "description": null,
            "accountType": "CASH",
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_TITLE");
}

#[tokio::test]
async fn test_page_parameters_are_validated() {
    let app = spawn_app().await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    let (status, body) = send(
        &app.router,
        Method::GET,
        "/api/v1/accounts?size=0",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAGE_PARAMETERS");

    let (status, _) = send(
        &app.router,
        Method::GET,
        "/api/v1/accounts?page=-1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app.router,
        Method::GET,
        "/api/v1/accounts?size=101",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_account_input_is_validated() {
    let app = spawn_app().await;
    let (currency_id, _) = seed_classifier(&app.router).await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    // Empty title.
    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/accounts",
        Some(&token),
        Some(serde_json::json!({
            "title": "   ",
            "description": null,
            "accountType": "CASH",
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");

    // Currency reference must be a UUID.
    let (status, _) = send(
        &app.router,
        Method::POST,
        "/api/v1/accounts",
        Some(&token),
        Some(serde_json::json!({
            "title": "Checking",
            "description": null,
            "accountType": "CASH",
            "currencyId": "euro",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
