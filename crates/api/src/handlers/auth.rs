//! Login handlers for the two identity domains.
//!
//! Admins log in with username + password, clients with email + password.
//! Both receive an HS256 access token tagged with their domain. Unknown
//! account and wrong password produce the same 401 message.

use axum::extract::State;
use axum::Json;
use portal_core::domains::{DOMAIN_ADMIN, DOMAIN_CLIENT};
use portal_core::error::CoreError;
use serde::{Deserialize, Serialize};

use portal_db::repositories::{AdminRepo, ClientRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /admin/auth/login`.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /client/auth/login`.
#[derive(Debug, Deserialize)]
pub struct ClientLoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for both login endpoints.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// POST /api/v1/admin/auth/login
pub async fn admin_login(
    State(state): State<AppState>,
    Json(input): Json<AdminLoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let admin = AdminRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let verified = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    if !verified {
        return Err(invalid_credentials());
    }

    let token = generate_access_token(admin.id, DOMAIN_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(admin_id = %admin.id, "Admin logged in");

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer",
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
    }))
}

/// POST /api/v1/client/auth/login
pub async fn client_login(
    State(state): State<AppState>,
    Json(input): Json<ClientLoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let client = ClientRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let verified = verify_password(&input.password, &client.password_hash)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    if !verified {
        return Err(invalid_credentials());
    }

    let token = generate_access_token(client.id, DOMAIN_CLIENT, &state.config.jwt)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(client_id = %client.id, "Client logged in");

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer",
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
    }))
}
