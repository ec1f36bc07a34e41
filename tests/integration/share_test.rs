//! Integration tests for share code minting and resolution.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use codemedia_core::config::AppConfig;

fn code_of(body: &serde_json::Value) -> String {
    body["data"]["shared"]["code"]
        .as_str()
        .expect("No share code in response")
        .to_string()
}

#[tokio::test]
async fn test_share_then_resolve_anonymously() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;
    let id = app.create_snippet(&token, "Binary search").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    assert_eq!(shared.status, StatusCode::OK, "{:?}", shared.body);
    assert_eq!(shared.body["data"]["shared"]["isShared"], true);
    assert!(shared.body["data"]["shared"]["createdAt"].is_string());
    assert!(shared.body["data"]["shared"]["codeExpiresAt"].is_string());

    let code = code_of(&shared.body);
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let resolved = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(resolved.status, StatusCode::OK);
    assert_eq!(resolved.body["data"]["id"], id.as_str());
    assert_eq!(resolved.body["data"]["title"], "Binary search");
    assert_eq!(resolved.body["data"]["createdBy"]["username"], "owner");
}

#[tokio::test]
async fn test_expired_code_is_gone_and_snippet_unshared() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;
    let id = app.create_snippet(&token, "Quicksort").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    let original = code_of(&shared.body);

    app.clock.advance(Duration::minutes(16));

    let resolved = app
        .request("GET", &format!("/api/shared/{original}"), None, None)
        .await;
    assert_eq!(resolved.status, StatusCode::GONE);
    assert_eq!(resolved.body["error"], "EXPIRED");
    assert_eq!(resolved.body["message"], "shared code has expired");

    let snippet = app
        .request("GET", &format!("/api/snippets/{id}"), None, None)
        .await;
    assert_eq!(snippet.status, StatusCode::OK);
    assert_eq!(snippet.body["data"]["shared"]["isShared"], false);
    assert!(snippet.body["data"]["shared"]["code"].is_null());

    let again = app
        .request("GET", &format!("/api/shared/{original}"), None, None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let reshared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    assert_eq!(reshared.status, StatusCode::OK);
    assert_ne!(code_of(&reshared.body), original);
}

#[tokio::test]
async fn test_stale_share_reads_unshared_before_any_resolve() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;
    let id = app.create_snippet(&token, "Dijkstra").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    let code = code_of(&shared.body);

    app.clock.advance(Duration::minutes(16));

    let single = app
        .request("GET", &format!("/api/snippets/{id}"), None, None)
        .await;
    assert_eq!(single.body["data"]["shared"]["isShared"], false);
    assert!(single.body["data"]["shared"]["code"].is_null());

    for path in ["/api/snippets", "/api/snippets/search?q=dijkstra"] {
        let listed = app.request("GET", path, None, None).await;
        assert_eq!(listed.status, StatusCode::OK);
        assert_eq!(listed.body["data"][0]["shared"]["isShared"], false);
        assert!(listed.body["data"][0]["shared"]["code"].is_null());
    }

    let mine = app
        .request("GET", "/api/snippets/mine", None, Some(&token))
        .await;
    assert_eq!(mine.body["data"][0]["shared"]["isShared"], false);

    let resolved = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(resolved.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_code_is_valid_through_the_last_instant() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;
    let id = app.create_snippet(&token, "Heap").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    let code = code_of(&shared.body);

    app.clock.advance(Duration::minutes(15));
    let at_boundary = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(at_boundary.status, StatusCode::OK);

    app.clock.advance(Duration::milliseconds(1));
    let past_boundary = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(past_boundary.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_sharing_twice_returns_same_code() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;
    let id = app.create_snippet(&token, "Trie").await;

    let first = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    app.clock.advance(Duration::minutes(5));
    let second = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;

    assert_eq!(code_of(&first.body), code_of(&second.body));
    assert_eq!(
        first.body["data"]["shared"]["createdAt"],
        second.body["data"]["shared"]["createdAt"]
    );
}

#[tokio::test]
async fn test_non_owner_cannot_share() {
    let app = helpers::TestApp::new();
    let owner = app.signup("owner").await;
    let other = app.signup("other").await;
    let id = app.create_snippet(&owner, "Mine").await;

    let response = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "You are not authorized to share this snippet"
    );

    let snippet = app
        .request("GET", &format!("/api/snippets/{id}"), None, None)
        .await;
    assert_eq!(snippet.body["data"]["shared"]["isShared"], false);
}

#[tokio::test]
async fn test_anonymous_share_is_rejected() {
    let app = helpers::TestApp::new();
    let owner = app.signup("owner").await;
    let id = app.create_snippet(&owner, "Mine").await;

    let response = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not logged in");

    let garbage = app
        .request(
            "POST",
            &format!("/api/snippets/{id}/share"),
            None,
            Some("not-a-jwt"),
        )
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_share_unknown_snippet_is_not_found() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;

    let response = app
        .request(
            "POST",
            "/api/snippets/00000000-0000-0000-0000-000000000000/share",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/shared/NoSuchCd", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        "shared snippet not found or no longer available"
    );
}

#[tokio::test]
async fn test_colliding_code_is_retried() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;
    let first = app.create_snippet(&token, "First").await;
    let second = app.create_snippet(&token, "Second").await;

    app.codes.push("SameCode");
    app.codes.push("SameCode");
    app.codes.push("Distinct");

    let a = app
        .request("POST", &format!("/api/snippets/{first}/share"), None, Some(&token))
        .await;
    let b = app
        .request("POST", &format!("/api/snippets/{second}/share"), None, Some(&token))
        .await;

    assert_eq!(code_of(&a.body), "SameCode");
    assert_eq!(code_of(&b.body), "Distinct");
    assert_eq!(app.codes.remaining(), 0);
}

#[tokio::test]
async fn test_expired_code_can_be_minted_for_another_snippet() {
    let app = helpers::TestApp::new();
    let token = app.signup("owner").await;
    let first = app.create_snippet(&token, "First").await;
    let second = app.create_snippet(&token, "Second").await;

    app.codes.push("Recycle1");
    app.request("POST", &format!("/api/snippets/{first}/share"), None, Some(&token))
        .await;

    app.clock.advance(Duration::minutes(20));
    let gone = app.request("GET", "/api/shared/Recycle1", None, None).await;
    assert_eq!(gone.status, StatusCode::GONE);

    app.codes.push("Recycle1");
    let b = app
        .request("POST", &format!("/api/snippets/{second}/share"), None, Some(&token))
        .await;
    assert_eq!(code_of(&b.body), "Recycle1");

    let resolved = app.request("GET", "/api/shared/Recycle1", None, None).await;
    assert_eq!(resolved.status, StatusCode::OK);
    assert_eq!(resolved.body["data"]["id"], second.as_str());
}

#[tokio::test]
async fn test_conceal_expired_reports_not_found() {
    let mut config = AppConfig::default();
    config.share.conceal_expired = true;
    let app = helpers::TestApp::with_config(config);
    let token = app.signup("owner").await;
    let id = app.create_snippet(&token, "Secret").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    let code = code_of(&shared.body);

    app.clock.advance(Duration::minutes(16));
    let response = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        "shared snippet not found or no longer available"
    );
}

#[tokio::test]
async fn test_custom_ttl_and_length() {
    let mut config = AppConfig::default();
    config.share.ttl_minutes = 1;
    config.share.code_length = 12;
    let app = helpers::TestApp::with_config(config);
    let token = app.signup("owner").await;
    let id = app.create_snippet(&token, "Short lived").await;

    let shared = app
        .request("POST", &format!("/api/snippets/{id}/share"), None, Some(&token))
        .await;
    let code = code_of(&shared.body);
    assert_eq!(code.len(), 12);

    app.clock.advance(Duration::seconds(61));
    let response = app
        .request("GET", &format!("/api/shared/{code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::GONE);
}
