//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches; nullable columns are tri-state
//!   (absent / null / value, see [`patch`])

pub mod listing;
pub mod notify;
pub mod patch;
pub mod seller;
pub mod shipment;
pub mod species;
