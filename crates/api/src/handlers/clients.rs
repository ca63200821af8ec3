//! Handlers for the `/admin/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::client::{ClientResponse, CreateClient};
use portal_db::repositories::ClientRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// GET /api/v1/admin/clients
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClientResponse>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/admin/clients
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<ClientResponse>)> {
    if input.name.trim().is_empty() || input.email.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name and email must not be empty".into(),
        )));
    }
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash =
        hash_password(&input.password).map_err(|e| AppError::InternalError(e.to_string()))?;

    let client = ClientRepo::create(
        &state.pool,
        input.name.trim(),
        input.email.trim(),
        input.company.as_deref(),
        input.phone.as_deref(),
        &password_hash,
    )
    .await?;

    tracing::info!(client_id = %client.id, admin_id = %admin.admin_id, "Client account created");

    Ok((StatusCode::CREATED, Json(client.into())))
}

/// GET /api/v1/admin/clients/{id}
pub async fn get_by_id(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClientResponse>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Client")))?;
    Ok(Json(client.into()))
}

/// DELETE /api/v1/admin/clients/{id}
///
/// Returns 409 if the client still owns projects.
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Client")));
    }

    tracing::info!(client_id = %id, admin_id = %admin.admin_id, "Client account deleted");

    Ok(StatusCode::NO_CONTENT)
}
