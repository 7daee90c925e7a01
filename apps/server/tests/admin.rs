mod common;

use axum::http::{Method, StatusCode};

use common::{
    account_balance, admin_token, create_account, create_operation, login, register_and_login,
    seed_classifier, send, spawn_app,
};

#[tokio::test]
async fn test_admin_override_mutates_any_account_and_is_audited() {
    let app = spawn_app().await;
    let (currency_id, category_id) = seed_classifier(&app.router).await;
    let alice = register_and_login(&app.router, "alice@example.com", "alice-password").await;
    let admin = admin_token(&app.router).await;

    let account = create_account(&app.router, &alice, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();
    let operation = create_operation(
        &app.router, &alice, account_id, 10.0, 1_000, &currency_id, &category_id,
    )
    .await;
    let operation_id = operation["id"].as_str().unwrap();
    let version = operation["updatedAt"].as_i64().unwrap();

    // The admin sees the account without owning it.
    let (status, page) = send(
        &app.router,
        Method::GET,
        &format!("/api/v1/admin/operations/account/{account_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 1);

    // Override update, same version rules as the owner path.
    let (status, updated) = send(
        &app.router,
        Method::PUT,
        &format!(
            "/api/v1/admin/operations/account/{account_id}/operation/{operation_id}/dt_update/{version}"
        ),
        Some(&admin),
        Some(serde_json::json!({
            "date": 1_000,
            "description": "Corrected by support",
            "categoryId": category_id,
            "value": 25.0,
            "currencyId": currency_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["value"], serde_json::json!(25.0));
    assert_eq!(
        account_balance(&app.router, &alice, account_id).await,
        serde_json::json!(25.0)
    );

    // Override delete with the refreshed token.
    let new_version = updated["updatedAt"].as_i64().unwrap();
    let (status, _) = send(
        &app.router,
        Method::DELETE,
        &format!(
            "/api/v1/admin/operations/account/{account_id}/operation/{operation_id}/dt_update/{new_version}"
        ),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(
        account_balance(&app.router, &alice, account_id).await,
        serde_json::json!(0.0)
    );

    // Both mutations left audit records, newest first.
    let (status, me) = send(&app.router, Method::GET, "/api/v1/users/me", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let admin_id = me["id"].as_str().unwrap();

    let (status, audit) =
        send(&app.router, Method::GET, "/api/v1/admin/audit", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(audit["totalElements"], 2);
    assert_eq!(audit["content"][0]["essenceType"], "OPERATION");
    assert_eq!(audit["content"][0]["essenceId"], operation_id);
    assert_eq!(audit["content"][0]["userId"], admin_id);
    let newest = audit["content"][0]["createdAt"].as_i64().unwrap();
    let oldest = audit["content"][1]["createdAt"].as_i64().unwrap();
    assert!(newest >= oldest);
}

#[tokio::test]
async fn test_admin_override_respects_version_and_existence() {
    let app = spawn_app().await;
    let (currency_id, category_id) = seed_classifier(&app.router).await;
    let alice = register_and_login(&app.router, "alice@example.com", "alice-password").await;
    let admin = admin_token(&app.router).await;

    let account = create_account(&app.router, &alice, "Checking", &currency_id).await;
    let account_id = account["id"].as_str().unwrap();
    let operation = create_operation(
        &app.router, &alice, account_id, 10.0, 1_000, &currency_id, &category_id,
    )
    .await;
    let operation_id = operation["id"].as_str().unwrap();
    let stale = operation["updatedAt"].as_i64().unwrap() - 1;

    let (status, body) = send(
        &app.router,
        Method::DELETE,
        &format!(
            "/api/v1/admin/operations/account/{account_id}/operation/{operation_id}/dt_update/{stale}"
        ),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "VERSION_CONFLICT");

    // A rejected override writes no audit record.
    let (_, audit) = send(&app.router, Method::GET, "/api/v1/admin/audit", Some(&admin), None).await;
    assert_eq!(audit["totalElements"], 0);

    let (status, _) = send(
        &app.router,
        Method::GET,
        "/api/v1/admin/operations/account/ghost-account",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_manages_users() {
    let app = spawn_app().await;
    let admin = admin_token(&app.router).await;

    let (status, manager) = send(
        &app.router,
        Method::POST,
        "/api/v1/admin/users",
        Some(&admin),
        Some(serde_json::json!({
            "mail": "manager@example.com",
            "fullName": "Manny the Manager",
            "password": "manager-password",
            "role": "MANAGER",
            "status": "ACTIVATED",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(manager["role"], "MANAGER");
    let manager_id = manager["id"].as_str().unwrap();
    let version = manager["updatedAt"].as_i64().unwrap();

    // The created user can log in right away.
    login(&app.router, "manager@example.com", "manager-password").await;

    // Version-guarded profile update: deactivate the manager.
    let (status, updated) = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/admin/users/{manager_id}/dt_update/{version}"),
        Some(&admin),
        Some(serde_json::json!({
            "mail": "manager@example.com",
            "fullName": "Manny the Manager",
            "role": "MANAGER",
            "status": "DEACTIVATED",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "DEACTIVATED");

    // A deactivated user cannot log in any more.
    let (status, _) = send(
        &app.router,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({
            "mail": "manager@example.com",
            "password": "manager-password",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Stale token on the user update.
    let (status, body) = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/admin/users/{manager_id}/dt_update/{}", version - 1),
        Some(&admin),
        Some(serde_json::json!({
            "mail": "manager@example.com",
            "fullName": "Manny the Manager",
            "role": "MANAGER",
            "status": "ACTIVATED",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "VERSION_CONFLICT");

    // Both admin actions are in the trail.
    let (_, audit) = send(&app.router, Method::GET, "/api/v1/admin/audit", Some(&admin), None).await;
    assert_eq!(audit["totalElements"], 2);
    assert_eq!(audit["content"][0]["essenceType"], "USER");

    // Listing includes the seeded admin and the manager.
    let (status, page) =
        send(&app.router, Method::GET, "/api/v1/admin/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 2);

    let (status, fetched) = send(
        &app.router,
        Method::GET,
        &format!("/api/v1/admin/users/{manager_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["mail"], "manager@example.com");
}

#[tokio::test]
async fn test_admin_create_user_duplicate_mail_conflicts() {
    let app = spawn_app().await;
    let admin = admin_token(&app.router).await;
    register_and_login(&app.router, "taken@example.com", "user-password").await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/admin/users",
        Some(&admin),
        Some(serde_json::json!({
            "mail": "taken@example.com",
            "fullName": "Clone",
            "password": "clone-password",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_MAIL");
}

#[tokio::test]
async fn test_admin_routes_are_role_gated() {
    let app = spawn_app().await;
    let user = register_and_login(&app.router, "alice@example.com", "alice-password").await;

    for uri in [
        "/api/v1/admin/users",
        "/api/v1/admin/audit",
        "/api/v1/admin/operations/account/some-id",
    ] {
        let (status, _) = send(&app.router, Method::GET, uri, Some(&user), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "expected 403 for {uri}");

        let (status, _) = send(&app.router, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "expected 401 for {uri}");
    }
}
