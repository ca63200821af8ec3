//! Bearer-token extractors for the two identity domains.
//!
//! [`AdminUser`] and [`ClientUser`] are the access guard: a handler that
//! takes one of them as a parameter can only run for a caller holding a
//! valid token issued in that domain. All rejection paths use the same
//! generic 401 message so a caller cannot probe which check failed.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use portal_core::domains::{DOMAIN_ADMIN, DOMAIN_CLIENT};
use portal_core::error::CoreError;
use portal_core::types::DbId;

use portal_db::repositories::{AdminRepo, ClientRepo};

use crate::auth::jwt::{validate_token, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// Validate the `Authorization: Bearer <token>` header against one domain.
fn resolve_claims(parts: &Parts, state: &AppState, domain: &str) -> Result<Claims, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    // A token from the other identity domain is rejected with the same
    // message as an invalid one.
    if claims.dom != domain {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired token".into(),
        )));
    }

    Ok(claims)
}

fn unknown_subject() -> AppError {
    // Same message as any other bad token. A token whose subject was deleted
    // must not reveal that the account ever existed.
    AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
}

/// Admin principal resolved from a bearer token in the admin domain.
///
/// ```ignore
/// async fn admin_only(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = %admin.admin_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The admin's id, usable for `created_by`/`uploaded_by` attribution.
    pub admin_id: DbId,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = resolve_claims(parts, state, DOMAIN_ADMIN)?;

        // The subject must still exist; a token outliving its account is dead.
        let admin = AdminRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(unknown_subject)?;

        Ok(AdminUser { admin_id: admin.id })
    }
}

/// Client principal resolved from a bearer token in the client domain.
///
/// Handlers scope every query by `client_id` so a client can only ever see
/// their own projects.
#[derive(Debug, Clone)]
pub struct ClientUser {
    pub client_id: DbId,
}

impl FromRequestParts<AppState> for ClientUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = resolve_claims(parts, state, DOMAIN_CLIENT)?;

        if !ClientRepo::exists(&state.pool, claims.sub).await? {
            return Err(unknown_subject());
        }

        Ok(ClientUser {
            client_id: claims.sub,
        })
    }
}
