//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use codemedia_api::{AppState, build_app};
use codemedia_core::config::AppConfig;
use codemedia_core::traits::ManualClock;
use codemedia_database::memory::{MemorySnippetStore, MemoryUserStore};
use codemedia_service::share::ScriptedCodeGenerator;

/// Password that satisfies the default strength rules.
pub const PASSWORD: &str = "Password123!";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Clock driving share-code expiry
    pub clock: Arc<ManualClock>,
    /// Code generator; scripted codes are handed out before random ones
    pub codes: Arc<ScriptedCodeGenerator>,
    /// Snippet store, for direct inspection
    pub snippets: Arc<MemorySnippetStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over the in-memory stores
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with custom settings
    pub fn with_config(mut config: AppConfig) -> Self {
        config.database.url = codemedia_api::app::MEMORY_DATABASE_URL.to_string();

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let codes = Arc::new(ScriptedCodeGenerator::default());
        let snippets = Arc::new(MemorySnippetStore::new());

        let state = AppState::new(
            config.clone(),
            snippets.clone(),
            Arc::new(MemoryUserStore::new()),
            clock.clone(),
            codes.clone(),
        );

        Self {
            router: build_app(state),
            clock,
            codes,
            snippets,
            config,
        }
    }

    /// Sign up a user and return their token
    pub async fn signup(&self, username: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({
                    "username": username,
                    "email": format!("{}@test.com", username),
                    "password": PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Signup failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Login and return a token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Create a snippet as the given user and return its ID
    pub async fn create_snippet(&self, token: &str, title: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/snippets",
                Some(serde_json::json!({
                    "title": title,
                    "code": "fn main() { println!(\"hi\"); }",
                    "description": "A tiny program",
                    "language": "rust",
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create snippet failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("No id in created snippet")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn token_of(response: &TestResponse) -> String {
    response.body["data"]["token"]
        .as_str()
        .expect("No token in auth response")
        .to_string()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
