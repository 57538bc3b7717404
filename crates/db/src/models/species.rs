//! Species reference catalog model (read-only to the application).

use serde::Serialize;
use sqlx::FromRow;
use stockboard_core::types::{DbId, Timestamp};

/// A row from the `species` catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Species {
    pub id: DbId,
    pub scientific_name: String,
    pub common_name: String,
    pub category: String,
    pub family: Option<String>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub ph_min: Option<f64>,
    pub ph_max: Option<f64>,
    pub max_size_inches: Option<f64>,
    pub difficulty: Option<String>,
    pub aggression: Option<String>,
    pub aliases: Vec<String>,
    pub is_verified: bool,
    pub created_at: Timestamp,
}
