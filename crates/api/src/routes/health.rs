//! Health check routes, mounted at the root (outside `/api/v1`).

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// ```text
/// GET /health     -> liveness
/// GET /health/db  -> readiness (includes a database round trip)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/db", get(health::health_db))
}
