//! Route definitions for the `/admin/client-projects` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::client_projects;
use crate::state::AppState;

/// Routes mounted at `/admin/client-projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete (cascades attachments)
/// POST   /{id}/files              -> upload_file (multipart)
/// DELETE /{id}/files/{file_id}    -> delete_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(client_projects::list).post(client_projects::create),
        )
        .route(
            "/{id}",
            get(client_projects::get_by_id)
                .put(client_projects::update)
                .delete(client_projects::delete),
        )
        .route("/{id}/files", post(client_projects::upload_file))
        .route(
            "/{id}/files/{file_id}",
            delete(client_projects::delete_file),
        )
}
