//! Route definitions for the authenticated `/seller` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sellers;
use crate::state::AppState;

/// Routes mounted at `/seller`.
///
/// ```text
/// GET /profile   -> get_profile
/// PUT /profile   -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(sellers::get_profile).put(sellers::update_profile),
    )
}
