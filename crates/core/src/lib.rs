//! Domain logic for Stockboard: seller inventory boards for aquarium
//! livestock.
//!
//! This crate has no database or HTTP dependencies so the same rules can be
//! exercised by the API layer, seed tooling, and unit tests. Anything that
//! touches Postgres lives in `stockboard-db`; anything that touches axum
//! lives in `stockboard-api`.

pub mod board;
pub mod error;
pub mod format;
pub mod freshness;
pub mod listing;
pub mod plan;
pub mod slug;
pub mod species;
pub mod types;
