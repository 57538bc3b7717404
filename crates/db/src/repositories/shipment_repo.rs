//! Repository for the `shipments` table.

use sqlx::PgPool;
use stockboard_core::types::DbId;

use crate::models::shipment::{CreateShipment, Shipment};

/// Column list for `shipments` queries.
const SHIPMENT_COLUMNS: &str = "id, seller_id, label, arrival_date, created_at";

/// Provides data access for shipments.
pub struct ShipmentRepo;

impl ShipmentRepo {
    /// Create a shipment batch marker. No constraints beyond ownership.
    pub async fn create(
        pool: &PgPool,
        seller_id: DbId,
        dto: &CreateShipment,
    ) -> Result<Shipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO shipments (seller_id, label, arrival_date) \
             VALUES ($1, $2, $3) \
             RETURNING {SHIPMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Shipment>(&query)
            .bind(seller_id)
            .bind(&dto.label)
            .bind(dto.arrival_date)
            .fetch_one(pool)
            .await
    }

    /// All shipments for a seller, most recent arrival first.
    pub async fn list_for_seller(
        pool: &PgPool,
        seller_id: DbId,
    ) -> Result<Vec<Shipment>, sqlx::Error> {
        let query = format!(
            "SELECT {SHIPMENT_COLUMNS} FROM shipments \
             WHERE seller_id = $1 \
             ORDER BY arrival_date DESC"
        );
        sqlx::query_as::<_, Shipment>(&query)
            .bind(seller_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the seller's shipments by id.
    pub async fn find_for_seller(
        pool: &PgPool,
        id: DbId,
        seller_id: DbId,
    ) -> Result<Option<Shipment>, sqlx::Error> {
        let query =
            format!("SELECT {SHIPMENT_COLUMNS} FROM shipments WHERE id = $1 AND seller_id = $2");
        sqlx::query_as::<_, Shipment>(&query)
            .bind(id)
            .bind(seller_id)
            .fetch_optional(pool)
            .await
    }
}
