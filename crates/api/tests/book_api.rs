//! HTTP-level integration tests for the book-sharing endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, ALICE_TOKEN, BOB_TOKEN};
use sqlx::PgPool;

async fn create_book(pool: &PgPool, token: &str, title: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/books",
        Some(token),
        serde_json::json!({ "title": title, "author": "Somebody" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_own_books(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;

    let created = create_book(&pool, ALICE_TOKEN, "Dune").await;
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["is_available"], true);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/books/mine", Some(ALICE_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_title_rejected(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/books",
        Some(ALICE_TOKEN),
        serde_json::json!({ "title": "   ", "author": "Somebody" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_available_listing_excludes_unavailable(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;
    common::sign_in(common::build_test_app(pool.clone()), BOB_TOKEN).await;

    let kept = create_book(&pool, ALICE_TOKEN, "Kept").await;
    let hidden = create_book(&pool, ALICE_TOKEN, "Hidden").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/books/{}", hidden["id"]),
        Some(ALICE_TOKEN),
        serde_json::json!({ "is_available": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/books", Some(BOB_TOKEN)).await;
    let json = body_json(response).await;
    let books = json["data"].as_array().unwrap().clone();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], kept["id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_without_condition_keeps_stored_condition(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/books",
        Some(ALICE_TOKEN),
        serde_json::json!({ "title": "Dune", "author": "Somebody", "condition": "good" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let book = body_json(response).await;
    assert_eq!(book["condition"], "good");

    // Omitting condition leaves it alone; sending null does too.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/books/{}", book["id"]),
        Some(ALICE_TOKEN),
        serde_json::json!({ "title": "Dune Messiah" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Dune Messiah");
    assert_eq!(updated["condition"], "good");

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/books/{}", book["id"]),
        Some(ALICE_TOKEN),
        serde_json::json!({ "condition": null }),
    )
    .await;
    let updated = body_json(response).await;
    assert_eq!(updated["condition"], "good");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_owner_book_writes_return_404(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;
    common::sign_in(common::build_test_app(pool.clone()), BOB_TOKEN).await;
    let book = create_book(&pool, ALICE_TOKEN, "Dune").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/books/{}", book["id"]),
        Some(BOB_TOKEN),
        serde_json::json!({ "title": "Mine Now" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/books/{}", book["id"]), Some(BOB_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_lifecycle(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;
    common::sign_in(common::build_test_app(pool.clone()), BOB_TOKEN).await;
    let book = create_book(&pool, ALICE_TOKEN, "Dune").await;

    // Bob requests Alice's book.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/books/{}/requests", book["id"]),
        Some(BOB_TOKEN),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let request = body_json(response).await;
    assert_eq!(request["status"], "pending");

    // Bob sees it outgoing; Alice sees it incoming.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/requests", Some(BOB_TOKEN)).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/requests/incoming", Some(ALICE_TOKEN)).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Only Alice (the book's owner) may set the status.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/requests/{}", request["id"]),
        Some(BOB_TOKEN),
        serde_json::json!({ "status": "approved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/requests/{}", request["id"]),
        Some(ALICE_TOKEN),
        serde_json::json!({ "status": "approved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "approved");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cannot_request_own_or_unavailable_book(pool: PgPool) {
    common::sign_in(common::build_test_app(pool.clone()), ALICE_TOKEN).await;
    common::sign_in(common::build_test_app(pool.clone()), BOB_TOKEN).await;
    let book = create_book(&pool, ALICE_TOKEN, "Dune").await;

    // Own book.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/books/{}/requests", book["id"]),
        Some(ALICE_TOKEN),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unavailable book.
    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        &format!("/api/v1/books/{}", book["id"]),
        Some(ALICE_TOKEN),
        serde_json::json!({ "is_available": false }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/books/{}/requests", book["id"]),
        Some(BOB_TOKEN),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown book.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/books/999999/requests",
        Some(BOB_TOKEN),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
