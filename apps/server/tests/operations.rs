mod common;

use axum::http::{Method, StatusCode};

use common::{
    account_balance, create_account, create_operation, register_and_login, seed_classifier, send,
    spawn_app,
};

#[tokio::test]
async fn test_operations_drive_the_account_balance() {
    let app = spawn_app().await;
    let (currency_id, category_id) = seed_classifier(&app.router).await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    let account = create_account(&app.router, &token, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();

    let expense = create_operation(
        &app.router, &token, account_id, -150.5, 1_000, &currency_id, &category_id,
    )
    .await;
    assert_eq!(expense["value"], serde_json::json!(-150.5));
    assert_eq!(
        account_balance(&app.router, &token, account_id).await,
        serde_json::json!(-150.5)
    );

    let income = create_operation(
        &app.router, &token, account_id, 1000.0, 2_000, &currency_id, &category_id,
    )
    .await;
    assert_eq!(
        account_balance(&app.router, &token, account_id).await,
        serde_json::json!(849.5)
    );

    // Replacing the expense moves the balance again.
    let expense_id = expense["id"].as_str().unwrap();
    let expense_version = expense["updatedAt"].as_i64().unwrap();
    let (status, updated) = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/accounts/{account_id}/operations/{expense_id}/dt_update/{expense_version}"),
        Some(&token),
        Some(serde_json::json!({
            "date": 1_000,
            "description": "Adjusted expense",
            "categoryId": category_id,
            "value": -50.0,
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["value"], serde_json::json!(-50.0));
    assert_eq!(
        account_balance(&app.router, &token, account_id).await,
        serde_json::json!(950.0)
    );

    // Deleting the income leaves only the adjusted expense.
    let income_id = income["id"].as_str().unwrap();
    let income_version = income["updatedAt"].as_i64().unwrap();
    let (status, body) = send(
        &app.router,
        Method::DELETE,
        &format!("/api/v1/accounts/{account_id}/operations/{income_id}/dt_update/{income_version}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);
    assert_eq!(
        account_balance(&app.router, &token, account_id).await,
        serde_json::json!(-50.0)
    );
}

#[tokio::test]
async fn test_list_operations_most_recent_date_first() {
    let app = spawn_app().await;
    let (currency_id, category_id) = seed_classifier(&app.router).await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    let account = create_account(&app.router, &token, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();

    for date in [1_000, 3_000, 2_000] {
        create_operation(
            &app.router, &token, account_id, 10.0, date, &currency_id, &category_id,
        )
        .await;
    }

    let (status, page) = send(
        &app.router,
        Method::GET,
        &format!("/api/v1/accounts/{account_id}/operations?page=0&size=2"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["content"][0]["date"], 3_000);
    assert_eq!(page["content"][1]["date"], 2_000);
    assert_eq!(page["first"], true);
    assert_eq!(page["last"], false);

    let (_, tail) = send(
        &app.router,
        Method::GET,
        &format!("/api/v1/accounts/{account_id}/operations?page=1&size=2"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(tail["content"][0]["date"], 1_000);
    assert_eq!(tail["last"], true);
}

#[tokio::test]
async fn test_stale_operation_version_conflicts() {
    let app = spawn_app().await;
    let (currency_id, category_id) = seed_classifier(&app.router).await;
    let token = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    let account = create_account(&app.router, &token, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();
    let operation = create_operation(
        &app.router, &token, account_id, 10.0, 1_000, &currency_id, &category_id,
    )
    .await;
    let operation_id = operation["id"].as_str().unwrap();
    let stale = operation["updatedAt"].as_i64().unwrap() - 1;

    let (status, body) = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/accounts/{account_id}/operations/{operation_id}/dt_update/{stale}"),
        Some(&token),
        Some(serde_json::json!({
            "date": 1_000,
            "description": null,
            "categoryId": category_id,
            "value": 99.0,
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "VERSION_CONFLICT");

    let (status, _) = send(
        &app.router,
        Method::DELETE,
        &format!("/api/v1/accounts/{account_id}/operations/{operation_id}/dt_update/{stale}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // The rejected writes left the balance alone.
    assert_eq!(
        account_balance(&app.router, &token, account_id).await,
        serde_json::json!(10.0)
    );
}

#[tokio::test]
async fn test_foreign_account_operations_are_not_found() {
    let app = spawn_app().await;
    let (currency_id, category_id) = seed_classifier(&app.router).await;
    let alice = register_and_login(&app.router, "alice@example.com", "alice-password").await;
    let bob = register_and_login(&app.router, "bob@example.com", "bob-password").await;

    let account = create_account(&app.router, &alice, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();
    let operation = create_operation(
        &app.router, &alice, account_id, 10.0, 1_000, &currency_id, &category_id,
    )
    .await;
    let operation_id = operation["id"].as_str().unwrap();
    let version = operation["updatedAt"].as_i64().unwrap();

    // Bob cannot see, list into, or mutate Alice's account.
    let (status, body) = send(
        &app.router,
        Method::POST,
        &format!("/api/v1/accounts/{account_id}/operations"),
        Some(&bob),
        Some(serde_json::json!({
            "date": 1_000,
            "description": null,
            "categoryId": category_id,
            "value": 5.0,
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(
        &app.router,
        Method::GET,
        &format!("/api/v1/accounts/{account_id}/operations"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app.router,
        Method::DELETE,
        &format!("/api/v1/accounts/{account_id}/operations/{operation_id}/dt_update/{version}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The account check comes first: a ghost operation id under the right
    // owner still reports the operation, not the account.
    let (status, body) = send(
        &app.router,
        Method::DELETE,
        &format!("/api/v1/accounts/{account_id}/operations/ghost/dt_update/{version}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Operation not found");
}
