//! Route definitions for the client-facing `/client/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::client_portal;
use crate::state::AppState;

/// Routes mounted at `/client/projects`.
///
/// ```text
/// GET /                                  -> list_my_projects
/// GET /{id}                              -> get_my_project
/// GET /{id}/files/{file_id}/download     -> download_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client_portal::list_my_projects))
        .route("/{id}", get(client_portal::get_my_project))
        .route(
            "/{id}/files/{file_id}/download",
            get(client_portal::download_file),
        )
}
