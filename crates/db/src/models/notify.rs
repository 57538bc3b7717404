//! Buyer restock-notification request models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockboard_core::types::{DbId, Timestamp};

/// A row from the `notify_requests` table. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotifyRequest {
    pub id: DbId,
    pub listing_item_id: DbId,
    pub buyer_email: Option<String>,
    pub buyer_phone: Option<String>,
    pub created_at: Timestamp,
    pub notified_at: Option<Timestamp>,
}

/// DTO for a buyer requesting a restock notification. At least one contact
/// method is required (validated at the API).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotifyRequest {
    pub buyer_email: Option<String>,
    pub buyer_phone: Option<String>,
}
