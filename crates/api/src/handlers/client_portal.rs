//! Client-facing handlers for the `/client/projects` resource.
//!
//! Every query is scoped to the authenticated client's id. A project owned
//! by someone else and a project that does not exist produce byte-identical
//! 404 responses, so the portal cannot be used to enumerate other clients'
//! projects.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use tokio_util::io::ReaderStream;

use portal_db::models::client_project::ClientProjectResponse;
use portal_db::repositories::{ClientProjectRepo, ProjectFileRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::client_projects::with_files_bulk;
use crate::middleware::auth::ClientUser;
use crate::state::AppState;

/// GET /api/v1/client/projects
///
/// Lists only the caller's projects.
pub async fn list_my_projects(
    client: ClientUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClientProjectResponse>>> {
    let projects = ClientProjectRepo::list_by_client(&state.pool, client.client_id).await?;
    Ok(Json(with_files_bulk(&state.pool, projects).await?))
}

/// GET /api/v1/client/projects/{id}
pub async fn get_my_project(
    client: ClientUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClientProjectResponse>> {
    let project = ClientProjectRepo::find_by_id_for_client(&state.pool, id, client.client_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project")))?;

    let files = ProjectFileRepo::list_by_project(&state.pool, project.id).await?;
    Ok(Json(ClientProjectResponse::new(project, files)))
}

/// GET /api/v1/client/projects/{id}/files/{file_id}/download
///
/// Streams the attachment bytes as `application/octet-stream` with the
/// original filename in `Content-Disposition`. A metadata row whose on-disk
/// object is missing means the store invariant was violated; that is logged
/// as a warning and reported as a distinct 404.
pub async fn download_file(
    client: ClientUser,
    State(state): State<AppState>,
    Path((project_id, file_id)): Path<(DbId, DbId)>,
) -> AppResult<Response> {
    let project =
        ClientProjectRepo::find_by_id_for_client(&state.pool, project_id, client.client_id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Project")))?;

    let file = ProjectFileRepo::find(&state.pool, project.id, file_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("File")))?;

    if !state.files.exists(&file.file_path).await {
        tracing::warn!(
            project_id = %project.id,
            file_id = %file.id,
            path = %file.file_path,
            "Attachment metadata exists but the on-disk object is missing",
        );
        return Err(AppError::Core(CoreError::NotFound(
            "File not found on server".into(),
        )));
    }

    let (handle, len) = state.files.open(&file.file_path).await?;
    let stream = ReaderStream::new(handle);

    // Quotes stripped from the display name to keep the header well-formed.
    let safe_name = file.filename.replace(['"', '\r', '\n'], "_");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::CONTENT_LENGTH, len.to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{safe_name}\""),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InternalError(e.to_string()))
}
