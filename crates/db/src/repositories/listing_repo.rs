//! Repository for the `listing_items` table.
//!
//! Every method is scoped by `seller_id`; an id belonging to another seller
//! simply returns `None`. Quantity columns are always written as the
//! normalized triple from a validated [`Quantity`], so the tagged-union
//! invariant can never be violated by a partial patch.

use sqlx::PgPool;
use stockboard_core::listing::Quantity;
use stockboard_core::types::{DbId, Timestamp};

use crate::models::listing::{BoardRow, CreateListingItem, ListingItem, UpdateListingItem};

/// Column list for `listing_items` queries.
const ITEM_COLUMNS: &str = "\
    id, seller_id, species_id, custom_species_name, category, common_name, \
    scientific_name, quantity_type, quantity_exact, quantity_label, size_label, \
    price_low, price_high, notes, is_wysiwyg, is_active, is_archived, \
    shipment_id, sort_order, created_at, updated_at";

/// Same columns qualified for the shipment join.
const BOARD_COLUMNS: &str = "\
    li.id, li.seller_id, li.species_id, li.custom_species_name, li.category, \
    li.common_name, li.scientific_name, li.quantity_type, li.quantity_exact, \
    li.quantity_label, li.size_label, li.price_low, li.price_high, li.notes, \
    li.is_wysiwyg, li.is_active, li.is_archived, li.shipment_id, li.sort_order, \
    li.created_at, li.updated_at, \
    s.arrival_date AS shipment_arrival, s.label AS shipment_label";

/// Provides data access for listing items.
pub struct ListingRepo;

impl ListingRepo {
    /// Count a seller's non-archived items (the number the plan ceiling
    /// applies to).
    pub async fn count_active(pool: &PgPool, seller_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM listing_items WHERE seller_id = $1 AND NOT is_archived",
        )
        .bind(seller_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a new item: active, not archived, sort position appended to
    /// the end of the seller's board.
    pub async fn create(
        pool: &PgPool,
        seller_id: DbId,
        dto: &CreateListingItem,
        quantity: &Quantity,
    ) -> Result<ListingItem, sqlx::Error> {
        let (quantity_type, quantity_exact, quantity_label) = quantity.to_parts();
        let query = format!(
            "INSERT INTO listing_items ( \
                 seller_id, species_id, custom_species_name, category, common_name, \
                 scientific_name, quantity_type, quantity_exact, quantity_label, \
                 size_label, price_low, price_high, notes, is_wysiwyg, shipment_id, \
                 sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
                 (SELECT COALESCE(MAX(sort_order) + 1, 0) \
                    FROM listing_items WHERE seller_id = $1)) \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ListingItem>(&query)
            .bind(seller_id)
            .bind(dto.species_id)
            .bind(&dto.custom_species_name)
            .bind(&dto.category)
            .bind(&dto.common_name)
            .bind(&dto.scientific_name)
            .bind(quantity_type)
            .bind(quantity_exact)
            .bind(quantity_label)
            .bind(&dto.size_label)
            .bind(dto.price_low)
            .bind(dto.price_high)
            .bind(&dto.notes)
            .bind(dto.is_wysiwyg)
            .bind(dto.shipment_id)
            .fetch_one(pool)
            .await
    }

    /// Find one of the seller's items by id (archived included, so the
    /// dashboard can still render a just-archived row).
    pub async fn find_for_seller(
        pool: &PgPool,
        id: DbId,
        seller_id: DbId,
    ) -> Result<Option<ListingItem>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM listing_items WHERE id = $1 AND seller_id = $2");
        sqlx::query_as::<_, ListingItem>(&query)
            .bind(id)
            .bind(seller_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a validated patch.
    ///
    /// Non-nullable fields use `COALESCE`; nullable fields are tri-state
    /// (a provided-flag plus value pair, so an explicit `null` writes NULL
    /// while an absent key keeps the stored value); the quantity triple is
    /// always written in full from the merged, re-validated [`Quantity`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        seller_id: DbId,
        dto: &UpdateListingItem,
        quantity: &Quantity,
    ) -> Result<Option<ListingItem>, sqlx::Error> {
        let (quantity_type, quantity_exact, quantity_label) = quantity.to_parts();
        let query = format!(
            "UPDATE listing_items SET \
                 species_id = CASE WHEN $3 THEN $4 ELSE species_id END, \
                 custom_species_name = CASE WHEN $5 THEN $6 ELSE custom_species_name END, \
                 category = COALESCE($7, category), \
                 common_name = COALESCE($8, common_name), \
                 scientific_name = CASE WHEN $9 THEN $10 ELSE scientific_name END, \
                 quantity_type = $11, \
                 quantity_exact = $12, \
                 quantity_label = $13, \
                 size_label = CASE WHEN $14 THEN $15 ELSE size_label END, \
                 price_low = CASE WHEN $16 THEN $17 ELSE price_low END, \
                 price_high = CASE WHEN $18 THEN $19 ELSE price_high END, \
                 notes = CASE WHEN $20 THEN $21 ELSE notes END, \
                 is_wysiwyg = COALESCE($22, is_wysiwyg), \
                 shipment_id = CASE WHEN $23 THEN $24 ELSE shipment_id END, \
                 updated_at = NOW() \
             WHERE id = $1 AND seller_id = $2 AND NOT is_archived \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ListingItem>(&query)
            .bind(id)
            .bind(seller_id)
            .bind(dto.species_id.is_some())
            .bind(dto.species_id.flatten())
            .bind(dto.custom_species_name.is_some())
            .bind(dto.custom_species_name.clone().flatten())
            .bind(&dto.category)
            .bind(&dto.common_name)
            .bind(dto.scientific_name.is_some())
            .bind(dto.scientific_name.clone().flatten())
            .bind(quantity_type)
            .bind(quantity_exact)
            .bind(quantity_label)
            .bind(dto.size_label.is_some())
            .bind(dto.size_label.clone().flatten())
            .bind(dto.price_low.is_some())
            .bind(dto.price_low.flatten())
            .bind(dto.price_high.is_some())
            .bind(dto.price_high.flatten())
            .bind(dto.notes.is_some())
            .bind(dto.notes.clone().flatten())
            .bind(dto.is_wysiwyg)
            .bind(dto.shipment_id.is_some())
            .bind(dto.shipment_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Flip the active switch. Archived rows are excluded; archival is
    /// terminal.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        seller_id: DbId,
        active: bool,
    ) -> Result<Option<ListingItem>, sqlx::Error> {
        let query = format!(
            "UPDATE listing_items SET is_active = $3, updated_at = NOW() \
             WHERE id = $1 AND seller_id = $2 AND NOT is_archived \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ListingItem>(&query)
            .bind(id)
            .bind(seller_id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }

    /// Archive an item (soft delete). Terminal: there is no unarchive.
    pub async fn archive(
        pool: &PgPool,
        id: DbId,
        seller_id: DbId,
    ) -> Result<Option<ListingItem>, sqlx::Error> {
        let query = format!(
            "UPDATE listing_items SET is_archived = TRUE, updated_at = NOW() \
             WHERE id = $1 AND seller_id = $2 \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ListingItem>(&query)
            .bind(id)
            .bind(seller_id)
            .fetch_optional(pool)
            .await
    }

    /// All non-archived items for a seller with shipment arrival joined,
    /// in board order (seller sort position, newest first on ties).
    pub async fn list_board(pool: &PgPool, seller_id: DbId) -> Result<Vec<BoardRow>, sqlx::Error> {
        let query = format!(
            "SELECT {BOARD_COLUMNS} FROM listing_items li \
             LEFT JOIN shipments s ON s.id = li.shipment_id \
             WHERE li.seller_id = $1 AND NOT li.is_archived \
             ORDER BY li.sort_order ASC, li.created_at DESC"
        );
        sqlx::query_as::<_, BoardRow>(&query)
            .bind(seller_id)
            .fetch_all(pool)
            .await
    }

    /// Most recent update across a seller's non-archived items, for the
    /// public board's "Updated ..." stamp.
    pub async fn last_updated(
        pool: &PgPool,
        seller_id: DbId,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<Timestamp>>(
            "SELECT MAX(updated_at) FROM listing_items \
             WHERE seller_id = $1 AND NOT is_archived",
        )
        .bind(seller_id)
        .fetch_one(pool)
        .await
    }
}
