//! Integration tests for the `/api/v1/clients` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

fn ana() -> serde_json::Value {
    json!({
        "name": "Ana",
        "email": "ana@x.com",
        "phone": "111",
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_client_returns_201_with_assigned_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/clients", ana()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["address"], serde_json::Value::Null);
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_returns_409(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    post_json(app.clone(), "/api/v1/clients", ana()).await;

    let response = post_json(
        app,
        "/api/v1/clients",
        json!({ "name": "Impostor", "email": "ana@x.com", "phone": "222" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_email_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/clients",
        json!({ "name": "Ana", "email": "nope", "phone": "111" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_clients_returns_all(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    post_json(app.clone(), "/api/v1/clients", ana()).await;
    post_json(
        app.clone(),
        "/api/v1/clients",
        json!({ "name": "Bob", "email": "bob@x.com", "phone": "222" }),
    )
    .await;

    let response = get(app, "/api/v1/clients").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_client_by_id_includes_pets(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    post_json(app.clone(), "/api/v1/clients", ana()).await;
    post_json(
        app.clone(),
        "/api/v1/pets",
        json!({ "name": "Rex", "species": "Dog", "client_id": 1 }),
    )
    .await;

    let response = get(app, "/api/v1/clients/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Ana");
    let pets = json["pets"].as_array().unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["name"], "Rex");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_client_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/clients/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_id_is_rejected_before_the_core(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/clients/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update (full replace, id from path)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_is_full_replace_keyed_by_path_id(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    post_json(app.clone(), "/api/v1/clients", ana()).await;

    // The body carries no id; the path id wins.
    let response = put_json(
        app.clone(),
        "/api/v1/clients/1",
        json!({
            "name": "Ana Maria",
            "email": "ana.maria@x.com",
            "phone": "333",
            "address": "Calle Mayor 1",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Ana Maria");
    assert_eq!(json["address"], "Calle Mayor 1");

    let fetched = body_json(get(app, "/api/v1/clients/1").await).await;
    assert_eq!(fetched["email"], "ana.maria@x.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_client_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = put_json(
        app,
        "/api/v1/clients/42",
        json!({ "name": "Ghost", "email": "ghost@x.com", "phone": "000" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete + cascade policy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_client_returns_204_then_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    post_json(app.clone(), "/api/v1/clients", ana()).await;

    let response = delete(app.clone(), "/api/v1/clients/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), "/api/v1/clients/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/v1/clients/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Pins the chosen cascade policy: deleting a client that still owns pets
/// is rejected with 409 until the pets are removed.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_client_with_pets_is_restricted(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    post_json(app.clone(), "/api/v1/clients", ana()).await;
    post_json(
        app.clone(),
        "/api/v1/pets",
        json!({ "name": "Rex", "species": "Dog", "client_id": 1 }),
    )
    .await;

    let response = delete(app.clone(), "/api/v1/clients/1").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    delete(app.clone(), "/api/v1/pets/1").await;
    let response = delete(app, "/api/v1/clients/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
