//! Route definitions for the authenticated `/shipments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shipments;
use crate::state::AppState;

/// Routes mounted at `/shipments`.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create
/// GET  /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shipments::list).post(shipments::create))
        .route("/{id}", get(shipments::get_by_id))
}
