//! Repository for the read-only `species` catalog.

use sqlx::PgPool;
use stockboard_core::types::DbId;

use crate::models::species::Species;

/// Column list for `species` queries.
const SPECIES_COLUMNS: &str = "\
    id, scientific_name, common_name, category, family, \
    temp_min, temp_max, ph_min, ph_max, max_size_inches, \
    difficulty, aggression, aliases, is_verified, created_at";

/// Provides read access to the species catalog.
pub struct SpeciesRepo;

impl SpeciesRepo {
    /// Fetch one catalog entry by id, care attributes included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Species>, sqlx::Error> {
        let query = format!("SELECT {SPECIES_COLUMNS} FROM species WHERE id = $1");
        sqlx::query_as::<_, Species>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over common and scientific name.
    ///
    /// `pattern` must already be an escaped `%...%` ILIKE pattern (see
    /// `stockboard_core::species::ilike_pattern`); the short-query
    /// short-circuit happens in the handler, before any query runs.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<Species>, sqlx::Error> {
        let query = format!(
            "SELECT {SPECIES_COLUMNS} FROM species \
             WHERE common_name ILIKE $1 OR scientific_name ILIKE $1 \
             ORDER BY common_name \
             LIMIT $2"
        );
        sqlx::query_as::<_, Species>(&query)
            .bind(pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
