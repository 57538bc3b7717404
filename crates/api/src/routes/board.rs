//! Route definitions for the public `/boards` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::board;
use crate::state::AppState;

/// Routes mounted at `/boards`.
///
/// ```text
/// GET  /{slug}                     -> public_board
/// POST /{slug}/items/{id}/notify   -> notify
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(board::public_board))
        .route("/{slug}/items/{id}/notify", post(board::notify))
}
