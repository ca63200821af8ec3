//! Admin handlers for the `/admin/client-projects` resource.
//!
//! This is the side-effecting heart of the service: project CRUD plus the
//! attachment lifecycle that keeps the database and the on-disk file store
//! consistent. Ordering rules:
//!
//! - upload: write the bytes to disk first, then insert the metadata row
//! - delete file: remove the bytes first, then the metadata row
//! - delete project: best-effort removal of every object, then the record
//!
//! A crash between steps can leak an orphaned disk object or a metadata-less
//! file, but never a metadata row pointing at bytes we knowingly removed.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::projects::{clamp_progress, validate_project_name};
use portal_core::storage::FileStore;
use portal_core::types::DbId;
use uuid::Uuid;

use portal_db::models::client_project::{
    ClientProject, ClientProjectResponse, CreateClientProject, UpdateClientProject,
};
use portal_db::models::project_file::{CreateProjectFile, ProjectFile};
use portal_db::repositories::{ClientProjectRepo, ClientRepo, ProjectFileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// Verify that a client exists, returning "Client not found" if it does not.
async fn ensure_client_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if !ClientRepo::exists(pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Client")));
    }
    Ok(())
}

/// Assemble the API representation of one project with its attachments.
async fn with_files(
    pool: &sqlx::PgPool,
    project: ClientProject,
) -> AppResult<ClientProjectResponse> {
    let files = ProjectFileRepo::list_by_project(pool, project.id).await?;
    Ok(ClientProjectResponse::new(project, files))
}

/// Assemble API representations for a whole project list with one
/// attachment query instead of one per project.
pub(crate) async fn with_files_bulk(
    pool: &sqlx::PgPool,
    projects: Vec<ClientProject>,
) -> AppResult<Vec<ClientProjectResponse>> {
    let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
    let mut by_project: HashMap<DbId, Vec<ProjectFile>> = HashMap::new();
    for file in ProjectFileRepo::list_by_projects(pool, &ids).await? {
        by_project.entry(file.project_id).or_default().push(file);
    }

    Ok(projects
        .into_iter()
        .map(|p| {
            let files = by_project.remove(&p.id).unwrap_or_default();
            ClientProjectResponse::new(p, files)
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/client-projects
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClientProjectResponse>>> {
    let projects = ClientProjectRepo::list(&state.pool).await?;
    Ok(Json(with_files_bulk(&state.pool, projects).await?))
}

/// GET /api/v1/admin/client-projects/{id}
pub async fn get_by_id(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClientProjectResponse>> {
    let project = ClientProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project")))?;
    Ok(Json(with_files(&state.pool, project).await?))
}

/// POST /api/v1/admin/client-projects
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClientProject>,
) -> AppResult<(StatusCode, Json<ClientProjectResponse>)> {
    validate_project_name(&input.name)?;
    ensure_client_exists(&state.pool, input.client_id).await?;

    let progress = clamp_progress(input.progress.unwrap_or(0));
    let project = ClientProjectRepo::create(&state.pool, &input, progress, admin.admin_id).await?;

    tracing::info!(
        project_id = %project.id,
        client_id = %project.client_id,
        admin_id = %admin.admin_id,
        "Project created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ClientProjectResponse::new(project, Vec::new())),
    ))
}

/// PUT /api/v1/admin/client-projects/{id}
///
/// Partial update: every present field overwrites independently, absent
/// fields stay untouched, and `updated_at` is always refreshed.
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateClientProject>,
) -> AppResult<Json<ClientProjectResponse>> {
    if let Some(name) = &input.name {
        validate_project_name(name)?;
    }
    // Re-assignment must never leave a dangling client reference.
    if let Some(client_id) = input.client_id {
        ensure_client_exists(&state.pool, client_id).await?;
    }
    if let Some(progress) = input.progress {
        input.progress = Some(clamp_progress(progress));
    }

    let project = ClientProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project")))?;

    tracing::info!(project_id = %id, admin_id = %admin.admin_id, "Project updated");

    Ok(Json(with_files(&state.pool, project).await?))
}

/// DELETE /api/v1/admin/client-projects/{id}
///
/// Cascades attachment deletion: every on-disk object is removed best-effort
/// (an individual failure is logged and skipped), then the record goes,
/// taking the metadata rows with it.
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let project = ClientProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project")))?;

    let files = ProjectFileRepo::list_by_project(&state.pool, project.id).await?;
    for file in &files {
        if let Err(e) = state.files.delete(&file.file_path).await {
            tracing::warn!(
                project_id = %id,
                file_id = %file.id,
                error = %e,
                "Failed to remove attachment during project delete, continuing",
            );
        }
    }

    let deleted = ClientProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Project")));
    }

    tracing::info!(
        project_id = %id,
        file_count = files.len(),
        admin_id = %admin.admin_id,
        "Project deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/client-projects/{id}/files
///
/// Multipart upload with a required `file` field. The storage path is
/// derived from generated ids, never from the uploaded filename.
pub async fn upload_file(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectFile>)> {
    let project = ClientProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project")))?;

    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
        }
        // ignore unknown fields
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let file_id = Uuid::new_v4();
    let key = FileStore::object_key(project.id, file_id, &filename);

    // Bytes land on disk before any metadata references them. A failure here
    // leaves the project record untouched.
    state.files.save(&key, &data).await?;

    let file = ProjectFileRepo::add(
        &state.pool,
        &CreateProjectFile {
            id: file_id,
            project_id: project.id,
            filename,
            file_path: key,
            uploaded_by: admin.admin_id,
        },
    )
    .await?;

    tracing::info!(
        project_id = %project.id,
        file_id = %file.id,
        size_bytes = data.len(),
        admin_id = %admin.admin_id,
        "Attachment uploaded",
    );

    Ok((StatusCode::CREATED, Json(file)))
}

/// DELETE /api/v1/admin/client-projects/{id}/files/{file_id}
///
/// Removes the on-disk object first; only then the metadata row. A hard IO
/// failure keeps the row (metadata implies on-disk presence). An object
/// already missing from disk is tolerated -- removing the row is what
/// restores the invariant.
pub async fn delete_file(
    admin: AdminUser,
    State(state): State<AppState>,
    Path((project_id, file_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let project = ClientProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project")))?;

    let file = ProjectFileRepo::find(&state.pool, project.id, file_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("File")))?;

    let removed = state.files.delete(&file.file_path).await?;
    if !removed {
        tracing::warn!(
            project_id = %project.id,
            file_id = %file.id,
            path = %file.file_path,
            "Attachment was already missing from disk",
        );
    }

    // The row can vanish between the find above and this delete when two
    // admins race on the same attachment; the loser gets the same 404.
    if !ProjectFileRepo::remove(&state.pool, project.id, file_id).await? {
        return Err(AppError::Core(CoreError::not_found("File")));
    }

    tracing::info!(
        project_id = %project.id,
        file_id = %file_id,
        admin_id = %admin.admin_id,
        "Attachment deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
