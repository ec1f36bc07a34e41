//! Integration tests for snippet CRUD and search.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_and_list() {
    let app = helpers::TestApp::new();
    let token = app.signup("ada").await;
    app.create_snippet(&token, "Binary search").await;
    app.create_snippet(&token, "Quicksort").await;

    let all = app.request("GET", "/api/snippets", None, None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["success"], true);
    assert_eq!(all.body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(all.body["data"][0]["createdBy"]["username"], "ada");
    assert_eq!(all.body["data"][0]["shared"]["isShared"], false);
}

#[tokio::test]
async fn test_create_requires_login() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/snippets",
            Some(serde_json::json!({
                "title": "t",
                "code": "c",
                "description": "d",
                "language": "l",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.snippets.is_empty().await);
}

#[tokio::test]
async fn test_create_rejects_blank_fields() {
    let app = helpers::TestApp::new();
    let token = app.signup("ada").await;

    let response = app
        .request(
            "POST",
            "/api/snippets",
            Some(serde_json::json!({
                "title": "   ",
                "code": "c",
                "description": "d",
                "language": "l",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_mine_only_returns_own_snippets() {
    let app = helpers::TestApp::new();
    let ada = app.signup("ada").await;
    let grace = app.signup("grace").await;
    app.create_snippet(&ada, "Ada's").await;
    app.create_snippet(&grace, "Grace's").await;

    let mine = app.request("GET", "/api/snippets/mine", None, Some(&ada)).await;
    assert_eq!(mine.status, StatusCode::OK);
    let titles: Vec<&str> = mine.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|s| s["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Ada's"]);
}

#[tokio::test]
async fn test_get_unknown_snippet_returns_null() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/snippets/00000000-0000-0000-0000-000000000000",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].is_null());

    let malformed = app.request("GET", "/api/snippets/not-a-uuid", None, None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_matches_title_case_insensitively() {
    let app = helpers::TestApp::new();
    let token = app.signup("ada").await;
    app.create_snippet(&token, "Binary Search").await;
    app.create_snippet(&token, "Merge sort").await;

    let response = app
        .request("GET", "/api/snippets/search?q=binary", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.body["data"].as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Binary Search");
}

#[tokio::test]
async fn test_only_owner_can_edit() {
    let app = helpers::TestApp::new();
    let ada = app.signup("ada").await;
    let grace = app.signup("grace").await;
    let id = app.create_snippet(&ada, "Editable").await;

    let denied = app
        .request(
            "PUT",
            &format!("/api/snippets/{id}"),
            Some(serde_json::json!({ "code": "hijacked" })),
            Some(&grace),
        )
        .await;
    assert_eq!(denied.status, StatusCode::NOT_FOUND);
    assert_eq!(denied.body["message"], "Snippet not found or not authorized");

    let edited = app
        .request(
            "PUT",
            &format!("/api/snippets/{id}"),
            Some(serde_json::json!({ "code": "fn main() {}" })),
            Some(&ada),
        )
        .await;
    assert_eq!(edited.status, StatusCode::OK);
    assert_eq!(edited.body["data"]["code"], "fn main() {}");
}

#[tokio::test]
async fn test_edit_keeps_active_share() {
    let app = helpers::TestApp::new();
    let token = app.signup("ada").await;
    let id = app.create_snippet(&token, "Shared then edited").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    let code = shared.body["data"]["shared"]["code"]
        .as_str()
        .expect("code")
        .to_string();

    app.request(
        "PUT",
        &format!("/api/snippets/{id}"),
        Some(serde_json::json!({ "code": "let x = 1;" })),
        Some(&token),
    )
    .await;

    let resolved = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(resolved.status, StatusCode::OK);
    assert_eq!(resolved.body["data"]["code"], "let x = 1;");
}

#[tokio::test]
async fn test_delete_removes_snippet_and_its_share() {
    let app = helpers::TestApp::new();
    let ada = app.signup("ada").await;
    let grace = app.signup("grace").await;
    let id = app.create_snippet(&ada, "Doomed").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&ada))
        .await;
    let code = shared.body["data"]["shared"]["code"]
        .as_str()
        .expect("code")
        .to_string();

    let denied = app
        .request("DELETE", &format!("/api/snippets/{id}"), None, Some(&grace))
        .await;
    assert_eq!(denied.status, StatusCode::NOT_FOUND);

    let deleted = app
        .request("DELETE", &format!("/api/snippets/{id}"), None, Some(&ada))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"]["title"], "Doomed");

    let resolved = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(resolved.status, StatusCode::NOT_FOUND);
}
