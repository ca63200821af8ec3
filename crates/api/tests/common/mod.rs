//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt::oneshot`,
//! so the full middleware stack is exercised without a TCP listener. Each
//! test gets its own attachment-store root under the OS temp directory.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use portal_api::auth::jwt::{generate_access_token, JwtConfig};
use portal_api::auth::password::hash_password;
use portal_api::config::ServerConfig;
use portal_api::router::build_app_router;
use portal_api::state::AppState;
use portal_core::domains::{DOMAIN_ADMIN, DOMAIN_CLIENT};
use portal_core::storage::FileStore;
use portal_db::models::admin::CreateAdmin;
use portal_db::repositories::{AdminRepo, ClientRepo};

/// Password used for every seeded test account.
pub const TEST_PASSWORD: &str = "test-password-123";

/// Build a test `ServerConfig` with a known JWT secret and the given
/// upload root.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir,
        jwt: test_jwt_config(),
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-not-for-production".to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Create a fresh attachment store rooted under the OS temp directory.
pub fn test_files() -> FileStore {
    let root = std::env::temp_dir().join(format!("portal-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&root).expect("create test upload root");
    FileStore::new(root)
}

/// Build the full application router with all middleware layers, using the
/// given database pool and attachment store.
///
/// This goes through the same `build_app_router` as production.
pub fn build_test_app(pool: PgPool, files: FileStore) -> Router {
    let config = test_config(files.root().to_path_buf());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        files,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Insert an admin account and return its id plus a valid bearer token.
pub async fn seed_admin(pool: &PgPool) -> (Uuid, String) {
    let suffix = Uuid::new_v4().simple().to_string();
    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            username: format!("admin-{suffix}"),
            email: format!("admin-{suffix}@example.com"),
            name: "Test Admin".to_string(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
        },
    )
    .await
    .expect("seed admin");

    let token = generate_access_token(admin.id, DOMAIN_ADMIN, &test_jwt_config()).unwrap();
    (admin.id, token)
}

/// Insert a client account and return its id plus a valid bearer token.
pub async fn seed_client(pool: &PgPool, name: &str) -> (Uuid, String) {
    let suffix = Uuid::new_v4().simple().to_string();
    let client = ClientRepo::create(
        pool,
        name,
        &format!("{suffix}@example.com"),
        None,
        None,
        &hash_password(TEST_PASSWORD).unwrap(),
    )
    .await
    .expect("seed client");

    let token = generate_access_token(client.id, DOMAIN_CLIENT, &test_jwt_config()).unwrap();
    (client.id, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

fn request_builder(method: Method, path: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
}

pub async fn get(app: Router, path: &str, token: Option<&str>) -> Response<Body> {
    let request = request_builder(Method::GET, path, token)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = request_builder(Method::POST, path, token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(
    app: Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = request_builder(Method::PUT, path, token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, path: &str, token: Option<&str>) -> Response<Body> {
    let request = request_builder(Method::DELETE, path, token)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart form with a single `file` field.
pub async fn upload_file(
    app: Router,
    path: &str,
    token: &str,
    filename: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "portal-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = request_builder(Method::POST, path, Some(token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Assert a 404 response and return its JSON body for shape comparison.
pub async fn assert_not_found(response: Response<Body>) -> serde_json::Value {
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    json
}
