//! Route definitions for the public `/currencies` helper.

use axum::routing::get;
use axum::Router;

use crate::handlers::currencies;
use crate::state::AppState;

/// Routes mounted at `/currencies`.
///
/// ```text
/// GET /         -> list_currencies
/// GET /convert  -> convert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(currencies::list_currencies))
        .route("/convert", get(currencies::convert))
}
