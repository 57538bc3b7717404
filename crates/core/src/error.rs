//! Shared domain error taxonomy.
//!
//! Every fallible core operation returns [`CoreError`]. The API layer maps
//! these onto HTTP status codes in one place (`stockboard-api`'s `AppError`),
//! so the same variant always produces the same response shape.

use crate::types::DbId;

/// Domain-level errors shared across all Stockboard crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist, or exists but is owned by another seller.
    /// Foreign rows are reported as absent, never as forbidden.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or contradictory input. Surfaced immediately, no retry.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A plan-tier ceiling was hit before the write was attempted.
    /// Carries the specific limit for user-facing messaging.
    #[error("Plan limit reached: at most {limit} {resource} allowed on the current plan")]
    LimitExceeded { resource: &'static str, limit: i64 },

    /// A uniqueness conflict the user can correct (e.g. duplicate slug).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
