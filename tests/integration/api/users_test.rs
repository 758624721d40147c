//! Account API integration tests
//!
//! Tests for the user account endpoints, identifier validation and bearer
//! protection.

use axum::http::StatusCode;
use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::auth_helpers::{create_test_user, generate_test_token};
use crate::common::server::spawn_app;

#[tokio::test]
async fn test_add_user() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/users")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<u64>(), 1);
}

#[tokio::test]
async fn test_add_duplicate_username() {
    let app = spawn_app().await;
    create_test_user(&app.state, "alice").await;

    let response = app
        .server
        .post("/api/users")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_add_invalid_email() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/users")
        .json(&json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user() {
    let app = spawn_app().await;
    let user = create_test_user(&app.state, "alice").await;

    let response = app.server.get(&format!("/api/users/{}", user.id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["username"], "alice");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_unknown_user() {
    let app = spawn_app().await;
    let response = app.server.get("/api/users/42").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_positive_ids_are_rejected_everywhere() {
    let app = spawn_app().await;
    let token = generate_test_token("admin");

    for path in [
        "/api/users/0",
        "/api/users/-3",
        "/api/users/0/posts",
        "/api/users/0/edited-posts",
    ] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "GET {}", path);
    }

    let response = app.server.get("/api/users/exists").add_query_param("user_id", 0).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .delete("/api/users")
        .authorization_bearer(&token)
        .add_query_param("user_id", 0)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .patch("/api/users")
        .authorization_bearer(&token)
        .json(&json!({ "id": 0, "display_name": "Nobody" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_all_requires_token() {
    let app = spawn_app().await;
    create_test_user(&app.state, "alice").await;
    create_test_user(&app.state, "bob").await;

    let response = app.server.get("/api/users").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app.server.get("/api/users").authorization_bearer("not-a-jwt").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .get("/api/users")
        .authorization_bearer(generate_test_token("alice"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let users: Vec<Value> = response.json();
    let names: Vec<_> = users.iter().map(|u| u["username"].clone()).collect();
    assert_eq!(names, vec![json!("alice"), json!("bob")]);
}

#[tokio::test]
async fn test_login_token_opens_protected_routes() {
    let app = spawn_app().await;
    create_test_user(&app.state, "alice").await;

    let login: Value = app
        .server
        .post("/api/users/login")
        .json(&json!({ "username": "alice", "password": "correct-password" }))
        .await
        .json();
    let token = login["token"].as_str().unwrap().to_string();

    let response = app.server.get("/api/users").authorization_bearer(token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_user() {
    let app = spawn_app().await;
    let user = create_test_user(&app.state, "alice").await;
    let update = json!({ "id": user.id, "display_name": "Alice A." });

    let response = app.server.patch("/api/users").json(&update).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .patch("/api/users")
        .authorization_bearer(generate_test_token("alice"))
        .json(&update)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<u64>(), 1);

    let body: Value = app.server.get(&format!("/api/users/{}", user.id)).await.json();
    assert_eq!(body["display_name"], "Alice A.");
}

#[tokio::test]
async fn test_delete_user() {
    let app = spawn_app().await;
    let user = create_test_user(&app.state, "alice").await;

    let response = app.server.delete("/api/users").add_query_param("user_id", user.id).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .delete("/api/users")
        .authorization_bearer(generate_test_token("admin"))
        .add_query_param("user_id", user.id)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<u64>(), 1);

    let response = app.server.get("/api/users/exists").add_query_param("user_id", user.id).await;
    assert_eq!(response.json::<bool>(), false);
}

#[tokio::test]
async fn test_lookup_endpoints() {
    let app = spawn_app().await;
    let user = create_test_user(&app.state, "alice").await;

    let response = app
        .server
        .get("/api/users/id-by-username")
        .add_query_param("username", "alice")
        .await;
    assert_eq!(response.json::<i64>(), user.id);

    let response = app
        .server
        .get("/api/users/id-by-username")
        .add_query_param("username", "nobody")
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .get("/api/users/email-exists")
        .add_query_param("email", "alice@example.com")
        .await;
    assert_eq!(response.json::<bool>(), true);

    let response = app
        .server
        .get("/api/users/email-exists")
        .add_query_param("email", "nobody@example.com")
        .await;
    assert_eq!(response.json::<bool>(), false);

    let response = app.server.get("/api/users/exists").add_query_param("user_id", user.id).await;
    assert_eq!(response.json::<bool>(), true);
}

#[tokio::test]
async fn test_posts_endpoints() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.state, "alice").await;
    let bob = create_test_user(&app.state, "bob").await;

    sqlx::query(
        "INSERT INTO posts (title, content, author_id, editor_id, created_at, updated_at) VALUES (?1, 'body', ?2, ?3, ?4, ?4)",
    )
    .bind("Hello")
    .bind(alice.id)
    .bind(bob.id)
    .bind(Utc::now())
    .execute(&app.pool)
    .await
    .unwrap();

    let authored: Vec<Value> = app.server.get(&format!("/api/users/{}/posts", alice.id)).await.json();
    assert_eq!(authored.len(), 1);
    assert_eq!(authored[0]["title"], "Hello");

    let edited: Vec<Value> = app.server.get(&format!("/api/users/{}/edited-posts", bob.id)).await.json();
    assert_eq!(edited.len(), 1);
    assert_eq!(edited[0]["editor_id"], bob.id);

    let none: Vec<Value> = app.server.get(&format!("/api/users/{}/edited-posts", alice.id)).await.json();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = spawn_app().await;
    let response = app.server.get("/api/unknown").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["status"], 404);
}

#[tokio::test]
async fn test_non_numeric_id_gets_json_error() {
    let app = spawn_app().await;

    for path in ["/api/users/abc", "/api/users/abc/posts"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "GET {}", path);
        assert_eq!(response.json::<Value>()["status"], 400, "GET {}", path);
    }

    let response = app.server.get("/api/users/exists").add_query_param("user_id", "abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["status"], 400);
}
