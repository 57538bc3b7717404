//! Handlers for the public `/species` catalog: autocomplete lookup and
//! per-entry care details.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use stockboard_core::error::CoreError;
use stockboard_core::species::{ilike_pattern, normalize_query, SEARCH_LIMIT};
use stockboard_core::types::DbId;
use stockboard_db::models::species::Species;
use stockboard_db::repositories::SpeciesRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query string for `GET /species`.
#[derive(Debug, Deserialize)]
pub struct SpeciesSearchParams {
    pub q: Option<String>,
}

/// GET /api/v1/species?q=
///
/// Returns a plain JSON array of catalog matches, capped at ten. Queries
/// shorter than two characters short-circuit to an empty array without
/// touching the database.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SpeciesSearchParams>,
) -> AppResult<Json<Vec<Species>>> {
    let Some(query) = normalize_query(params.q.as_deref().unwrap_or("")) else {
        return Ok(Json(Vec::new()));
    };

    let pattern = ilike_pattern(&query);
    let results = SpeciesRepo::search(&state.pool, &pattern, SEARCH_LIMIT).await?;
    Ok(Json(results))
}

/// GET /api/v1/species/{id}
///
/// One catalog entry with its care attributes (difficulty, aggression,
/// temperature and pH ranges), as the board's item detail renders them.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Species>> {
    let species = SpeciesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Species",
            id,
        }))?;
    Ok(Json(species))
}
