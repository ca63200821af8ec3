pub mod auth;
pub mod client_portal;
pub mod client_projects;
pub mod clients;
pub mod currencies;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /admin/auth/login                                admin login (public)
/// /client/auth/login                               client login (public)
///
/// /admin/clients                                   list, create (admin only)
/// /admin/clients/{id}                              get, delete
///
/// /admin/client-projects                           list, create (admin only)
/// /admin/client-projects/{id}                      get, update, delete
/// /admin/client-projects/{id}/files                multipart upload
/// /admin/client-projects/{id}/files/{file_id}      delete attachment
///
/// /client/projects                                 list own projects
/// /client/projects/{id}                            get own project
/// /client/projects/{id}/files/{file_id}/download   stream attachment
///
/// /currencies                                      list rates (public)
/// /currencies/convert                              convert amount (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin/auth", auth::admin_router())
        .nest("/client/auth", auth::client_router())
        .nest("/admin/clients", clients::router())
        .nest("/admin/client-projects", client_projects::router())
        .nest("/client/projects", client_portal::router())
        .nest("/currencies", currencies::router())
}
