//! Route definitions for the two login endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/admin/auth`.
///
/// ```text
/// POST /login -> admin_login
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/login", post(auth::admin_login))
}

/// Routes mounted at `/client/auth`.
///
/// ```text
/// POST /login -> client_login
/// ```
pub fn client_router() -> Router<AppState> {
    Router::new().route("/login", post(auth::client_login))
}
