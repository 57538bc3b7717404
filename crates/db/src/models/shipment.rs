//! Shipment models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockboard_core::types::{DbId, Timestamp};

/// A row from the `shipments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shipment {
    pub id: DbId,
    pub seller_id: DbId,
    pub label: Option<String>,
    pub arrival_date: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a shipment batch marker.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShipment {
    pub label: Option<String>,
    pub arrival_date: Timestamp,
}
