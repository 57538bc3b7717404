//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod board;
pub mod listings;
pub mod sellers;
pub mod shipments;
pub mod species;
