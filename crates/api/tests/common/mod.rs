//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router (same middleware stack as production)
//! against a `#[sqlx::test]` pool, with a fake identity provider and
//! millisecond import delays so pipelines finish within a test run.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gitshelf_api::auth::verifier::{Principal, TokenVerifier};
use gitshelf_api::config::{ImportDelays, ServerConfig};
use gitshelf_api::engine::import::ImportEngine;
use gitshelf_api::router::build_app_router;
use gitshelf_api::state::AppState;
use gitshelf_core::error::CoreError;

/// Bearer token the fake provider maps to the first test identity.
pub const ALICE_TOKEN: &str = "token-alice";
/// Bearer token the fake provider maps to the second test identity.
pub const BOB_TOKEN: &str = "token-bob";

/// Fake identity provider: a fixed token -> principal table.
pub struct FakeVerifier {
    principals: HashMap<String, Principal>,
}

impl FakeVerifier {
    /// Two known identities, alice and bob.
    pub fn with_test_users() -> Self {
        let mut principals = HashMap::new();
        principals.insert(
            ALICE_TOKEN.to_string(),
            Principal {
                subject: "google-alice".to_string(),
                email: "alice@example.com".to_string(),
                name: "Alice".to_string(),
                picture: None,
            },
        );
        principals.insert(
            BOB_TOKEN.to_string(),
            Principal {
                subject: "google-bob".to_string(),
                email: "bob@example.com".to_string(),
                name: "Bob".to_string(),
                picture: None,
            },
        );
        Self { principals }
    }
}

#[async_trait]
impl TokenVerifier for FakeVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, CoreError> {
        self.principals
            .get(token)
            .cloned()
            .ok_or_else(|| CoreError::Unauthorized("Invalid token".into()))
    }
}

/// Build a test `ServerConfig` with safe defaults and fast import delays.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        import_delays: ImportDelays::uniform(Duration::from_millis(25)),
    }
}

/// Build the full application router with all middleware layers, the fake
/// identity provider, and millisecond import delays.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let engine = Arc::new(ImportEngine::new(pool.clone(), config.import_delays));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        verifier: Arc::new(FakeVerifier::with_test_users()),
        engine,
    };

    build_app_router(state, &config)
}

/// Sign in as the given token, creating the local user row. Returns the
/// user's id.
pub async fn sign_in(app: Router, token: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/auth/google",
        None,
        serde_json::json!({ "token": token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "sign-in should succeed");
    let json = body_json(response).await;
    json["user"]["id"].as_i64().expect("user id in response")
}

fn builder(method: &str, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        req = req.header("authorization", format!("Bearer {token}"));
    }
    req
}

/// Send a GET request, optionally authenticated.
pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let request = builder("GET", uri, token).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, optionally authenticated.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = builder("POST", uri, token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PATCH request with a JSON body, optionally authenticated.
pub async fn patch_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = builder("PATCH", uri, token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request, optionally authenticated.
pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let request = builder("DELETE", uri, token).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
