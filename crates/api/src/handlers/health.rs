//! Health check handlers.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /health
///
/// Liveness probe; does not touch the database.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /health/db
///
/// Readiness probe including a database round trip.
pub async fn health_db(State(state): State<AppState>) -> AppResult<Json<Value>> {
    portal_db::health_check(&state.pool).await?;
    Ok(Json(json!({ "status": "healthy", "database": "reachable" })))
}
