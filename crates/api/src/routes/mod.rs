pub mod auth;
pub mod board;
pub mod health;
pub mod listings;
pub mod sellers;
pub mod shipments;
pub mod species;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                        onboard a seller (public)
/// /auth/login                           login (public)
///
/// /species?q=                           catalog autocomplete (public)
/// /species/{id}                         catalog entry with care details
///
/// /boards/{slug}                        public availability board
/// /boards/{slug}/items/{id}/notify      buyer restock request (POST)
///
/// /seller/profile                       get, update (auth required)
///
/// /listings                             dashboard list, create
/// /listings/{id}                        get, patch
/// /listings/{id}/toggle                 availability toggle (POST)
/// /listings/{id}/archive                terminal archive (POST)
/// /listings/{id}/photos                 attach photo (POST)
/// /listings/{id}/photos/{photo_id}      remove photo (DELETE)
///
/// /shipments                            list, create
/// /shipments/{id}                       get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/species", species::router())
        .nest("/boards", board::router())
        .nest("/seller", sellers::router())
        .nest("/listings", listings::router())
        .nest("/shipments", shipments::router())
}
