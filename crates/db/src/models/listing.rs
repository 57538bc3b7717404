//! Listing item, photo models, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockboard_core::board::BoardListing;
use stockboard_core::error::CoreError;
use stockboard_core::listing::{is_available, Quantity};
use stockboard_core::types::{DbId, Timestamp};

use crate::models::patch::patch_field;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `listing_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingItem {
    pub id: DbId,
    pub seller_id: DbId,
    pub species_id: Option<DbId>,
    pub custom_species_name: Option<String>,
    pub category: String,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub quantity_type: String,
    pub quantity_exact: Option<i32>,
    pub quantity_label: Option<String>,
    pub size_label: Option<String>,
    pub price_low: Option<f64>,
    pub price_high: Option<f64>,
    pub notes: Option<String>,
    pub is_wysiwyg: bool,
    pub is_active: bool,
    pub is_archived: bool,
    pub shipment_id: Option<DbId>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ListingItem {
    /// Fold the stored quantity branch fields into the tagged union.
    ///
    /// The table CHECK constraint keeps rows consistent, so this only fails
    /// on data written outside the application.
    pub fn quantity(&self) -> Result<Quantity, CoreError> {
        Quantity::from_parts(
            &self.quantity_type,
            self.quantity_exact,
            self.quantity_label.as_deref(),
        )
    }

    /// The shared availability predicate. A row with an undecodable
    /// quantity branch is reported unavailable rather than erroring.
    pub fn availability(&self) -> bool {
        self.quantity()
            .map(|q| is_available(&q, self.is_active, self.is_archived))
            .unwrap_or(false)
    }
}

/// A listing row joined with its shipment's arrival date, as the board and
/// dashboard queries return it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoardRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: ListingItem,
    pub shipment_arrival: Option<Timestamp>,
    pub shipment_label: Option<String>,
}

impl BoardListing for BoardRow {
    fn common_name(&self) -> &str {
        &self.item.common_name
    }
    fn scientific_name(&self) -> Option<&str> {
        self.item.scientific_name.as_deref()
    }
    fn notes(&self) -> Option<&str> {
        self.item.notes.as_deref()
    }
    fn category(&self) -> &str {
        &self.item.category
    }
    fn is_archived(&self) -> bool {
        self.item.is_archived
    }
    fn is_available(&self) -> bool {
        self.item.availability()
    }
    fn sort_order(&self) -> i32 {
        self.item.sort_order
    }
    fn created_at(&self) -> Timestamp {
        self.item.created_at
    }
    fn shipment_arrival(&self) -> Option<Timestamp> {
        self.shipment_arrival
    }
}

/// A row from the `listing_photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingPhoto {
    pub id: DbId,
    pub listing_item_id: DbId,
    pub photo_url: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a listing item. Quantity fields are validated into a
/// [`Quantity`] before the insert; `is_active`/`is_archived`/`sort_order`
/// are assigned by the service, never by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingItem {
    pub species_id: Option<DbId>,
    pub custom_species_name: Option<String>,
    pub category: String,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub quantity_type: String,
    pub quantity_exact: Option<i32>,
    pub quantity_label: Option<String>,
    pub size_label: Option<String>,
    pub price_low: Option<f64>,
    pub price_high: Option<f64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_wysiwyg: bool,
    pub shipment_id: Option<DbId>,
}

/// DTO for partially updating a listing item. Quantity fields merge against
/// the stored row and re-validate before anything is written.
///
/// Nullable columns are tri-state ([`patch_field`]): an absent key keeps the
/// stored value, an explicit `null` clears it. Sending `"price_low": null,
/// "price_high": null` returns an item to "Contact for price", and
/// `"shipment_id": null` detaches it from its shipment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListingItem {
    #[serde(default, deserialize_with = "patch_field")]
    pub species_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub custom_species_name: Option<Option<String>>,
    pub category: Option<String>,
    pub common_name: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    pub scientific_name: Option<Option<String>>,
    pub quantity_type: Option<String>,
    pub quantity_exact: Option<i32>,
    pub quantity_label: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    pub size_label: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub price_low: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub price_high: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub notes: Option<Option<String>>,
    pub is_wysiwyg: Option<bool>,
    #[serde(default, deserialize_with = "patch_field")]
    pub shipment_id: Option<Option<DbId>>,
}

/// DTO for attaching a photo. The upload itself happens against the blob
/// store collaborator; the API only persists the resulting URL.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachPhoto {
    pub photo_url: String,
}
