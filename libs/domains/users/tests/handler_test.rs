//! Handler tests for Users domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Each test drives `handlers::router` over a fresh SQLite file.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDatabase, TestDataBuilder};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn service(db: &TestDatabase) -> UserService<SqliteUserRepository> {
    UserService::new(SqliteUserRepository::new(db.connector()))
}

fn app(db: &TestDatabase) -> Router {
    handlers::router(service(db))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_then_get_user() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Ann", "email": "ann@x.com", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "User created successfully"}));

    let response = app(&db).oneshot(empty_request("GET", "/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let user: UserResponse = json_body(response.into_body()).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@x.com");
}

#[tokio::test]
async fn test_responses_never_include_password() {
    let db = TestDatabase::new().await;
    seed_default_users(&service(&db)).await.unwrap();

    let response = app(&db).oneshot(empty_request("GET", "/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(users.len(), 3);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_list_users_empty_table() {
    let db = TestDatabase::new().await;

    let response = app(&db).oneshot(empty_request("GET", "/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<UserResponse> = json_body(response.into_body()).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_create_user_missing_or_empty_field_returns_400() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("create_validation");

    let bodies = [
        json!({"name": builder.name("user", "a"), "email": builder.email("a")}),
        json!({"name": "", "email": builder.email("b"), "password": "pw"}),
        json!({}),
    ];

    for body in bodies {
        let response = app(&db).oneshot(json_request("POST", "/users", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: Value = json_body(response.into_body()).await;
        assert_eq!(error["message"], "Missing data");
        assert_eq!(error["error"], "VALIDATION_ERROR");
    }

    assert_eq!(db.count_users().await, 0);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let db = TestDatabase::new().await;

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app(&db).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.count_users().await, 0);
}

#[tokio::test]
async fn test_get_user_not_found_and_bad_id() {
    let db = TestDatabase::new().await;

    let response = app(&db).oneshot(empty_request("GET", "/users/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["message"], "User not found");

    let response = app(&db).oneshot(empty_request("GET", "/users/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user() {
    let db = TestDatabase::new().await;
    seed_default_users(&service(&db)).await.unwrap();

    let response = app(&db)
        .oneshot(json_request(
            "PUT",
            "/users/2",
            json!({"name": "Jane Doe", "email": "jane.doe@example.com", "password": "newpass"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "User updated successfully");

    let response = app(&db)
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"email": "jane.doe@example.com", "password": "newpass"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: LoginResponse = json_body(response.into_body()).await;
    assert_eq!(body.user_id, 2);
}

#[tokio::test]
async fn test_update_missing_user_returns_404_without_insert() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(json_request(
            "PUT",
            "/users/99",
            json!({"name": "X", "email": "x@x.com", "password": "p"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(db.count_users().await, 0);
}

#[tokio::test]
async fn test_update_partial_body_returns_400() {
    let db = TestDatabase::new().await;
    seed_default_users(&service(&db)).await.unwrap();

    let response = app(&db)
        .oneshot(json_request("PUT", "/users/1", json!({"name": "Only Name"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let user = service(&db).get_user(1).await.unwrap();
    assert_eq!(user.name, "John Doe");
}

#[tokio::test]
async fn test_delete_user() {
    let db = TestDatabase::new().await;
    seed_default_users(&service(&db)).await.unwrap();

    let response = app(&db).oneshot(empty_request("DELETE", "/user/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "User deleted successfully");

    let response = app(&db).oneshot(empty_request("GET", "/users/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_user_returns_404() {
    let db = TestDatabase::new().await;

    let response = app(&db).oneshot(empty_request("DELETE", "/user/12345")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_users() {
    let db = TestDatabase::new().await;
    seed_default_users(&service(&db)).await.unwrap();

    let response = app(&db).oneshot(empty_request("GET", "/search?name=john")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let users: Vec<UserResponse> = json_body(response.into_body()).await;
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let response = app(&db).oneshot(empty_request("GET", "/search?name=zzz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["message"], "No users found");
}

#[tokio::test]
async fn test_search_without_name_returns_400() {
    let db = TestDatabase::new().await;

    for uri in ["/search", "/search?name="] {
        let response = app(&db).oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = json_body(response.into_body()).await;
        assert_eq!(error["message"], "Please provide a name to search");
    }
}

#[tokio::test]
async fn test_search_malformed_query_returns_json_400() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(empty_request("GET", "/search?name=a&name=b"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_QUERY");
    assert_eq!(error["code"], 1008);
}

#[tokio::test]
async fn test_login_seeded_user() {
    let db = TestDatabase::new().await;
    seed_default_users(&service(&db)).await.unwrap();

    let response = app(&db)
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"email": "john@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"status": "success", "user_id": 1}));
}

#[tokio::test]
async fn test_login_failures_share_one_response() {
    let db = TestDatabase::new().await;
    seed_default_users(&service(&db)).await.unwrap();

    let wrong_password = app(&db)
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"email": "john@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    let unknown_email = app(&db)
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"email": "ghost@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let first: Value = json_body(wrong_password.into_body()).await;
    let second: Value = json_body(unknown_email.into_body()).await;
    assert_eq!(first, second);
    assert_eq!(
        first,
        json!({"code": 1006, "error": "UNAUTHORIZED", "message": "Invalid credentials"})
    );
}

#[tokio::test]
async fn test_login_missing_fields_returns_400() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(json_request("POST", "/login", json!({"email": "john@example.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["message"], "Email and password are required");
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let connector = database::sqlite::SqliteConnector::new(
        database::sqlite::SqliteConfig::for_file(dir.path().join("no-schema.db")),
    );
    let app = handlers::router(UserService::new(SqliteUserRepository::new(connector)));

    let response = app.oneshot(empty_request("GET", "/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: Value = json_body(response.into_body()).await;
    assert!(error["message"].as_str().unwrap().starts_with("Database error: "));
}
