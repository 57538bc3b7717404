//! Repository for the `listing_photos` table.
//!
//! Photos belong exclusively to one listing item. Sort order ascends and
//! tolerates gaps after deletions; ties resolve by insertion time.

use sqlx::PgPool;
use stockboard_core::types::DbId;

use crate::models::listing::ListingPhoto;

/// Column list for `listing_photos` queries.
const PHOTO_COLUMNS: &str = "id, listing_item_id, photo_url, sort_order, created_at";

/// Provides data access for listing photos.
pub struct ListingPhotoRepo;

impl ListingPhotoRepo {
    /// Count photos on an item (for the plan ceiling pre-check).
    pub async fn count_for_item(pool: &PgPool, item_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM listing_photos WHERE listing_item_id = $1",
        )
        .bind(item_id)
        .fetch_one(pool)
        .await
    }

    /// Attach a photo URL, appended to the end of the item's sequence.
    pub async fn create(
        pool: &PgPool,
        item_id: DbId,
        photo_url: &str,
    ) -> Result<ListingPhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO listing_photos (listing_item_id, photo_url, sort_order) \
             VALUES ($1, $2, \
                 (SELECT COALESCE(MAX(sort_order) + 1, 0) \
                    FROM listing_photos WHERE listing_item_id = $1)) \
             RETURNING {PHOTO_COLUMNS}"
        );
        sqlx::query_as::<_, ListingPhoto>(&query)
            .bind(item_id)
            .bind(photo_url)
            .fetch_one(pool)
            .await
    }

    /// Remove a photo, scoped to the addressed item and its seller. A photo
    /// id reached through the wrong item's URL deletes nothing. Remaining
    /// photos keep their positions; gaps are fine.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        photo_id: DbId,
        item_id: DbId,
        seller_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM listing_photos p \
             USING listing_items li \
             WHERE p.id = $1 AND p.listing_item_id = $2 \
               AND li.id = p.listing_item_id AND li.seller_id = $3",
        )
        .bind(photo_id)
        .bind(item_id)
        .bind(seller_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Photos for one item in display order.
    pub async fn list_for_item(
        pool: &PgPool,
        item_id: DbId,
    ) -> Result<Vec<ListingPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM listing_photos \
             WHERE listing_item_id = $1 \
             ORDER BY sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, ListingPhoto>(&query)
            .bind(item_id)
            .fetch_all(pool)
            .await
    }

    /// Photos for a set of items in one round trip (board assembly stitches
    /// them onto their rows).
    pub async fn list_for_items(
        pool: &PgPool,
        item_ids: &[DbId],
    ) -> Result<Vec<ListingPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM listing_photos \
             WHERE listing_item_id = ANY($1) \
             ORDER BY listing_item_id, sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, ListingPhoto>(&query)
            .bind(item_ids)
            .fetch_all(pool)
            .await
    }
}
