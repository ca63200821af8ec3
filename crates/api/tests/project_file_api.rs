//! Attachment lifecycle integration tests: upload, download, delete, and
//! the disk cleanup performed when a whole project is removed.

mod common;

use axum::http::{header, StatusCode};
use axum::Router;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use portal_core::storage::FileStore;

async fn create_project(app: Router, token: &str, client_id: Uuid) -> String {
    let response = common::post_json(
        app,
        "/api/v1/admin/client-projects",
        Some(token),
        json!({"name": "Attachments", "client_id": client_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let project = common::body_json(response).await;
    project["id"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_creates_metadata_and_disk_object(pool: PgPool) {
    let (admin_id, token) = common::seed_admin(&pool).await;
    let (client_id, _) = common::seed_client(&pool, "Acme Corp").await;
    let files = common::test_files();
    let app = common::build_test_app(pool, files.clone());

    let project_id = create_project(app.clone(), &token, client_id).await;

    let response = common::upload_file(
        app.clone(),
        &format!("/api/v1/admin/client-projects/{project_id}/files"),
        &token,
        "Quarterly Report.PDF",
        b"pdf bytes here",
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let file = common::body_json(response).await;
    assert_eq!(file["filename"], "Quarterly Report.PDF");
    assert_eq!(file["uploaded_by"], json!(admin_id));
    assert!(file["uploaded_at"].as_str().is_some());
    // Storage key is id-derived with the sanitized extension, never the
    // client-supplied name.
    let key = file["file_path"].as_str().unwrap();
    assert!(key.starts_with(&format!("{project_id}/")));
    assert!(key.ends_with(".pdf"));
    assert!(files.exists(key).await);

    // The project now reports the attachment.
    let response = common::get(
        app,
        &format!("/api/v1/admin/client-projects/{project_id}"),
        Some(&token),
    )
    .await;
    let project = common::body_json(response).await;
    assert_eq!(project["files"].as_array().unwrap().len(), 1);
    assert_eq!(project["files"][0]["id"], file["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_without_file_field_is_bad_request(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let (client_id, _) = common::seed_client(&pool, "Acme Corp").await;
    let app = common::build_test_app(pool, common::test_files());

    let project_id = create_project(app.clone(), &token, client_id).await;

    // A multipart body whose only field is not named `file`.
    let boundary = "portal-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
    );
    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri(format!("/api/v1/admin/client-projects/{project_id}/files"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(axum::body::Body::from(body))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_to_nonexistent_project(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool, common::test_files());

    let response = common::upload_file(
        app,
        &format!("/api/v1/admin/client-projects/{}/files", Uuid::new_v4()),
        &token,
        "brief.pdf",
        b"bytes",
    )
    .await;

    common::assert_not_found(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_file_removes_metadata_and_disk_object(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let (client_id, _) = common::seed_client(&pool, "Acme Corp").await;
    let files = common::test_files();
    let app = common::build_test_app(pool, files.clone());

    let project_id = create_project(app.clone(), &token, client_id).await;
    let upload = common::upload_file(
        app.clone(),
        &format!("/api/v1/admin/client-projects/{project_id}/files"),
        &token,
        "notes.txt",
        b"scratch",
    )
    .await;
    let file = common::body_json(upload).await;
    let file_id = file["id"].as_str().unwrap();
    let key = file["file_path"].as_str().unwrap().to_string();
    assert!(files.exists(&key).await);

    let response = common::delete(
        app.clone(),
        &format!("/api/v1/admin/client-projects/{project_id}/files/{file_id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!files.exists(&key).await);

    // Metadata is gone too.
    let response = common::get(
        app.clone(),
        &format!("/api/v1/admin/client-projects/{project_id}"),
        Some(&token),
    )
    .await;
    let project = common::body_json(response).await;
    assert_eq!(project["files"], json!([]));

    // Deleting it again 404s.
    let response = common::delete(
        app,
        &format!("/api/v1/admin/client-projects/{project_id}/files/{file_id}"),
        Some(&token),
    )
    .await;
    let json = common::assert_not_found(response).await;
    assert_eq!(json["error"], "File not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_file_tolerates_missing_disk_object(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let (client_id, _) = common::seed_client(&pool, "Acme Corp").await;
    let files = common::test_files();
    let app = common::build_test_app(pool, files.clone());

    let project_id = create_project(app.clone(), &token, client_id).await;
    let upload = common::upload_file(
        app.clone(),
        &format!("/api/v1/admin/client-projects/{project_id}/files"),
        &token,
        "notes.txt",
        b"scratch",
    )
    .await;
    let file = common::body_json(upload).await;
    let file_id = file["id"].as_str().unwrap();
    let key = file["file_path"].as_str().unwrap().to_string();

    // Simulate external removal of the disk object.
    assert!(files.delete(&key).await.unwrap());

    // Deleting the attachment still succeeds; removing the metadata row is
    // what restores consistency.
    let response = common::delete(
        app.clone(),
        &format!("/api/v1/admin/client-projects/{project_id}/files/{file_id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = common::get(
        app,
        &format!("/api/v1/admin/client-projects/{project_id}"),
        Some(&token),
    )
    .await;
    let project = common::body_json(response).await;
    assert_eq!(project["files"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_delete_removes_all_disk_objects(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let (client_id, _) = common::seed_client(&pool, "Acme Corp").await;
    let files = common::test_files();
    let app = common::build_test_app(pool.clone(), files.clone());

    let project_id = create_project(app.clone(), &token, client_id).await;
    let mut keys = Vec::new();
    for name in ["a.pdf", "b.png"] {
        let upload = common::upload_file(
            app.clone(),
            &format!("/api/v1/admin/client-projects/{project_id}/files"),
            &token,
            name,
            b"bytes",
        )
        .await;
        let file = common::body_json(upload).await;
        keys.push(file["file_path"].as_str().unwrap().to_string());
    }
    for key in &keys {
        assert!(files.exists(key).await);
    }

    let response = common::delete(
        app,
        &format!("/api/v1/admin/client-projects/{project_id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for key in &keys {
        assert!(!files.exists(key).await, "disk object {key} should be gone");
    }

    // The metadata rows went with the project record.
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM project_files WHERE project_id = $1")
            .bind(Uuid::parse_str(&project_id).unwrap())
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_path_never_uses_client_filename(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let (client_id, _) = common::seed_client(&pool, "Acme Corp").await;
    let files = common::test_files();
    let app = common::build_test_app(pool, files.clone());

    let project_id = create_project(app.clone(), &token, client_id).await;

    let response = common::upload_file(
        app,
        &format!("/api/v1/admin/client-projects/{project_id}/files"),
        &token,
        "..%2F..%2Fescape.sh",
        b"#!/bin/sh",
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let file = common::body_json(response).await;
    let key = file["file_path"].as_str().unwrap();
    assert!(!key.contains(".."));
    // The object landed under the project directory inside the root.
    let absolute = FileStore::new(files.root()).absolute_path(key);
    assert!(absolute.starts_with(files.root()));
    assert!(files.exists(key).await);
}
