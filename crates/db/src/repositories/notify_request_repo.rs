//! Repository for the append-only `notify_requests` table.

use sqlx::PgPool;
use stockboard_core::types::DbId;

use crate::models::notify::NotifyRequest;

/// Column list for `notify_requests` queries.
const NOTIFY_COLUMNS: &str =
    "id, listing_item_id, buyer_email, buyer_phone, created_at, notified_at";

/// Provides data access for buyer restock-notification requests.
pub struct NotifyRequestRepo;

impl NotifyRequestRepo {
    /// Record a buyer's request. Nothing in the application consumes these
    /// rows afterwards; fulfillment happens out of band.
    pub async fn create(
        pool: &PgPool,
        listing_item_id: DbId,
        buyer_email: Option<&str>,
        buyer_phone: Option<&str>,
    ) -> Result<NotifyRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO notify_requests (listing_item_id, buyer_email, buyer_phone) \
             VALUES ($1, $2, $3) \
             RETURNING {NOTIFY_COLUMNS}"
        );
        sqlx::query_as::<_, NotifyRequest>(&query)
            .bind(listing_item_id)
            .bind(buyer_email)
            .bind(buyer_phone)
            .fetch_one(pool)
            .await
    }
}
