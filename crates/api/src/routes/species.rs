//! Route definitions for the public `/species` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::species;
use crate::state::AppState;

/// Routes mounted at `/species`.
///
/// ```text
/// GET /?q=   -> search
/// GET /{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(species::search))
        .route("/{id}", get(species::get_by_id))
}
