//! Integration tests for authentication flow.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_signup_returns_token_and_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "ada",
                "email": "ada@test.com",
                "password": helpers::PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert!(response.body["data"]["expiresAt"].is_string());
    assert_eq!(response.body["data"]["user"]["username"], "ada");
    assert_eq!(response.body["data"]["user"]["role"], "professor");
    assert!(response.body["data"]["user"].get("passwordHash").is_none());
    assert!(response.body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_rejects_weak_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "ada",
                "email": "ada@test.com",
                "password": "password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_email_rule() {
    let app = helpers::TestApp::new();

    for (email, expected) in [
        ("ada@example", StatusCode::BAD_REQUEST),
        ("@example.com", StatusCode::BAD_REQUEST),
        ("ada@example.", StatusCode::BAD_REQUEST),
        ("a b@c.d", StatusCode::OK),
    ] {
        let response = app
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({
                    "username": "ada",
                    "email": email,
                    "password": helpers::PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, expected, "{email}: {:?}", response.body);
        if expected == StatusCode::BAD_REQUEST {
            assert_eq!(response.body["message"], "Must use a valid email address");
        }
    }
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let app = helpers::TestApp::new();
    app.signup("ada").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "ada2",
                "email": "ada@test.com",
                "password": helpers::PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.signup("ada").await;

    let token = app.login("ada@test.com", helpers::PASSWORD).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();
    app.signup("ada").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "ada@test.com",
                "password": "Wrong123!",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Incorrect credentials");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.com",
                "password": helpers::PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Incorrect credentials");
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new();
    let token = app.signup("ada").await;
    app.create_snippet(&token, "Mine").await;

    let response = app.request("GET", "/api/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "ada");
    assert_eq!(
        response.body["data"]["savedSnippets"]
            .as_array()
            .map(Vec::len),
        Some(1)
    );
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not logged in");
}

#[tokio::test]
async fn test_delete_account_removes_snippets() {
    let app = helpers::TestApp::new();
    let token = app.signup("ada").await;
    app.create_snippet(&token, "Gone soon").await;

    let response = app.request("DELETE", "/api/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(app.snippets.is_empty().await);

    let relogin = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "ada@test.com",
                "password": helpers::PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(relogin.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "memory");
}
