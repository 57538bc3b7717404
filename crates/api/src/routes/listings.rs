//! Route definitions for the authenticated `/listings` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

/// Routes mounted at `/listings`.
///
/// ```text
/// GET    /                        -> list (dashboard)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PATCH  /{id}                    -> update
/// POST   /{id}/toggle             -> toggle
/// POST   /{id}/archive            -> archive
/// POST   /{id}/photos             -> attach_photo
/// DELETE /{id}/photos/{photo_id}  -> remove_photo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listings::list).post(listings::create))
        .route(
            "/{id}",
            get(listings::get_by_id).patch(listings::update),
        )
        .route("/{id}/toggle", post(listings::toggle))
        .route("/{id}/archive", post(listings::archive))
        .route("/{id}/photos", post(listings::attach_photo))
        .route("/{id}/photos/{photo_id}", delete(listings::remove_photo))
}
