//! HTTP-level integration tests for the auth endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, ALICE_TOKEN};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_google_sign_in_creates_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/google",
        None,
        serde_json::json!({ "token": ALICE_TOKEN }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert_eq!(json["user"]["google_id"], "google-alice");
    assert_eq!(json["token"], ALICE_TOKEN);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_google_sign_in_is_idempotent_per_subject(pool: PgPool) {
    let first = common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;
    let second = common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;
    assert_eq!(first, second, "same subject must map to the same user row");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_google_sign_in_without_token_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/google", None, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_google_sign_in_with_invalid_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/google",
        None,
        serde_json::json!({ "token": "bogus" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_authenticated_user(pool: PgPool) {
    let user_id = common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me", Some(ALICE_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["id"].as_i64().unwrap(), user_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_without_header_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_unknown_subject_returns_401(pool: PgPool) {
    // Valid token at the provider, but no POST /auth/google yet, so no
    // local user row exists.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me", Some(ALICE_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_acknowledges(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/logout",
        Some(ALICE_TOKEN),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
