//! Handlers for the authenticated `/listings` resource: dashboard listing,
//! CRUD, the availability toggle, archival, and photo attachment.
//!
//! Every repository call takes `auth.seller_id` explicitly; rows owned by
//! another seller come back as `None` and surface as 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use stockboard_core::error::CoreError;
use stockboard_core::listing::{
    toggle_transition, validate_descriptive_fields, ListingTransition, Quantity,
};
use stockboard_core::plan::{can_add_item, can_add_photo, limits_for};
use stockboard_core::types::DbId;
use stockboard_db::models::listing::{
    AttachPhoto, CreateListingItem, ListingItem, ListingPhoto, UpdateListingItem,
};
use stockboard_db::models::seller::Seller;
use stockboard_db::repositories::{ListingPhotoRepo, ListingRepo, SellerRepo, ShipmentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSeller;
use crate::state::AppState;
use crate::views::{item_detail, listing_views, ItemDetail, ListingView};

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Availability partition of the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub available: usize,
    pub sold_out: usize,
}

/// Response body for `GET /listings`.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub items: Vec<ListingView>,
    pub stats: DashboardStats,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/listings
///
/// The seller's dashboard: all non-archived items in board order with
/// photos, display strings, and an availability partition.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthSeller,
) -> AppResult<Json<DashboardResponse>> {
    let rows = ListingRepo::list_board(&state.pool, auth.seller_id).await?;
    let ids: Vec<DbId> = rows.iter().map(|r| r.item.id).collect();
    let photos = ListingPhotoRepo::list_for_items(&state.pool, &ids).await?;

    let items = listing_views(rows, photos, Utc::now());
    let available = items.iter().filter(|v| v.available).count();
    let stats = DashboardStats {
        total: items.len(),
        available,
        sold_out: items.len() - available,
    };

    Ok(Json(DashboardResponse { items, stats }))
}

/// POST /api/v1/listings
///
/// Create a listing item. The plan ceiling is checked before the insert, so
/// a breach never leaves a partial write. Photos are attached separately; a
/// photo-less item is a valid end state.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthSeller,
    Json(input): Json<CreateListingItem>,
) -> AppResult<(StatusCode, Json<ListingItem>)> {
    validate_descriptive_fields(&input.category, &input.common_name, input.notes.as_deref())?;
    let quantity = Quantity::from_parts(
        &input.quantity_type,
        input.quantity_exact,
        input.quantity_label.as_deref(),
    )?;
    if let Some(shipment_id) = input.shipment_id {
        ensure_own_shipment(&state, auth.seller_id, shipment_id).await?;
    }

    let seller = load_seller(&state, &auth).await?;
    let current = ListingRepo::count_active(&state.pool, auth.seller_id).await?;
    if !can_add_item(&seller.plan_tier, current) {
        let limits = limits_for(&seller.plan_tier);
        return Err(AppError::Core(CoreError::LimitExceeded {
            resource: "listing items",
            limit: limits.max_items.unwrap_or(current),
        }));
    }

    let item = ListingRepo::create(&state.pool, auth.seller_id, &input, &quantity).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/listings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthSeller,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemDetail>> {
    let item = find_own_item(&state, &auth, id).await?;
    let photos = ListingPhotoRepo::list_for_item(&state.pool, item.id).await?;
    Ok(Json(item_detail(item, photos)))
}

/// PATCH /api/v1/listings/{id}
///
/// Partial update. Quantity fields merge against the stored row and the
/// merged triple re-validates as a whole, so a patch can never leave the
/// branch fields contradicting `quantity_type`.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthSeller,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateListingItem>,
) -> AppResult<Json<ListingItem>> {
    let existing = find_own_item(&state, &auth, id).await?;
    if existing.is_archived {
        return Err(AppError::Core(CoreError::Conflict(
            "Archived listings cannot be modified".into(),
        )));
    }

    let quantity_type = input
        .quantity_type
        .as_deref()
        .unwrap_or(&existing.quantity_type);
    let quantity_exact = input.quantity_exact.or(existing.quantity_exact);
    let quantity_label = input
        .quantity_label
        .as_deref()
        .or(existing.quantity_label.as_deref());
    let quantity = Quantity::from_parts(quantity_type, quantity_exact, quantity_label)?;

    let category = input.category.as_deref().unwrap_or(&existing.category);
    let common_name = input
        .common_name
        .as_deref()
        .unwrap_or(&existing.common_name);
    // Tri-state: an explicit null clears notes, an absent key keeps them.
    let notes = match &input.notes {
        Some(patch) => patch.as_deref(),
        None => existing.notes.as_deref(),
    };
    validate_descriptive_fields(category, common_name, notes)?;

    // A null shipment_id detaches the item and needs no ownership check.
    if let Some(Some(shipment_id)) = input.shipment_id {
        ensure_own_shipment(&state, auth.seller_id, shipment_id).await?;
    }

    let item = ListingRepo::update(&state.pool, id, auth.seller_id, &input, &quantity)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id,
        }))?;
    Ok(Json(item))
}

/// POST /api/v1/listings/{id}/toggle
///
/// Flip the item's availability. A WYSIWYG item that is currently available
/// is a single physical unit being sold, so it archives instead.
pub async fn toggle(
    State(state): State<AppState>,
    auth: AuthSeller,
    Path(id): Path<DbId>,
) -> AppResult<Json<ListingItem>> {
    let item = find_own_item(&state, &auth, id).await?;
    if item.is_archived {
        return Err(AppError::Core(CoreError::Conflict(
            "Archived listings cannot be toggled".into(),
        )));
    }

    let updated = match toggle_transition(item.is_wysiwyg, item.availability(), item.is_active) {
        ListingTransition::Archive => ListingRepo::archive(&state.pool, id, auth.seller_id).await?,
        ListingTransition::SetActive(active) => {
            ListingRepo::set_active(&state.pool, id, auth.seller_id, active).await?
        }
    }
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Listing",
        id,
    }))?;

    Ok(Json(updated))
}

/// POST /api/v1/listings/{id}/archive
///
/// Terminal archive (soft delete). Idempotent; there is no unarchive.
pub async fn archive(
    State(state): State<AppState>,
    auth: AuthSeller,
    Path(id): Path<DbId>,
) -> AppResult<Json<ListingItem>> {
    let item = ListingRepo::archive(&state.pool, id, auth.seller_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id,
        }))?;
    Ok(Json(item))
}

/// POST /api/v1/listings/{id}/photos
///
/// Attach a photo URL to an item. The upload itself happens against the
/// blob store collaborator; only the resulting URL is persisted. The plan's
/// per-item photo ceiling is enforced before the insert.
pub async fn attach_photo(
    State(state): State<AppState>,
    auth: AuthSeller,
    Path(id): Path<DbId>,
    Json(input): Json<AttachPhoto>,
) -> AppResult<(StatusCode, Json<ListingPhoto>)> {
    if input.photo_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "photo_url must not be empty".into(),
        )));
    }

    let item = find_own_item(&state, &auth, id).await?;
    if item.is_archived {
        return Err(AppError::Core(CoreError::Conflict(
            "Archived listings cannot be modified".into(),
        )));
    }

    let seller = load_seller(&state, &auth).await?;
    let current = ListingPhotoRepo::count_for_item(&state.pool, item.id).await?;
    if !can_add_photo(&seller.plan_tier, current) {
        return Err(AppError::Core(CoreError::LimitExceeded {
            resource: "photos per listing",
            limit: limits_for(&seller.plan_tier).max_photos,
        }));
    }

    let photo = ListingPhotoRepo::create(&state.pool, item.id, &input.photo_url).await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

/// DELETE /api/v1/listings/{id}/photos/{photo_id}
///
/// Remove a photo. The photo must belong to the addressed listing; a photo
/// id under another of the seller's items reads as absent. Remaining photos
/// keep their positions; gaps are fine.
pub async fn remove_photo(
    State(state): State<AppState>,
    auth: AuthSeller,
    Path((id, photo_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ListingPhotoRepo::delete(&state.pool, photo_id, id, auth.seller_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id: photo_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load one of the seller's items or report it absent.
async fn find_own_item(
    state: &AppState,
    auth: &AuthSeller,
    id: DbId,
) -> AppResult<ListingItem> {
    ListingRepo::find_for_seller(&state.pool, id, auth.seller_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id,
        }))
}

/// Load the authenticated seller's row (needed for the plan tier).
async fn load_seller(state: &AppState, auth: &AuthSeller) -> AppResult<Seller> {
    SellerRepo::find_by_id(&state.pool, auth.seller_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Seller no longer exists".into())))
}

/// Reject shipment references that do not belong to the seller.
async fn ensure_own_shipment(
    state: &AppState,
    seller_id: DbId,
    shipment_id: DbId,
) -> AppResult<()> {
    ShipmentRepo::find_for_seller(&state.pool, shipment_id, seller_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "shipment {shipment_id} does not exist"
            )))
        })?;
    Ok(())
}
