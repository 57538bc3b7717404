//! Handlers for the public board: `GET /boards/{slug}` and buyer
//! restock-notification requests.
//!
//! Board assembly (filtering, "Just In" selection, category grouping) is
//! pure logic in `stockboard_core::board`; this handler only loads rows and
//! serializes the result.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use stockboard_core::board::{filter_items, group_by_category, just_in, BoardFilter};
use stockboard_core::error::CoreError;
use stockboard_core::listing::{category_label, is_valid_category};
use stockboard_core::types::{DbId, Timestamp};
use stockboard_db::models::listing::{BoardRow, ListingPhoto};
use stockboard_db::models::notify::{CreateNotifyRequest, NotifyRequest};
use stockboard_db::models::seller::Seller;
use stockboard_db::repositories::{ListingPhotoRepo, ListingRepo, NotifyRequestRepo, SellerRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{listing_view, ListingView, SellerPublicView};

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query string for `GET /boards/{slug}`.
#[derive(Debug, Deserialize)]
pub struct BoardParams {
    /// Case-insensitive substring over name, scientific name, and notes.
    pub q: Option<String>,
    /// Restrict to one category.
    pub category: Option<String>,
    /// Include sold-out and paused items.
    #[serde(default)]
    pub show_sold_out: bool,
}

/// One category section of the board.
#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub label: &'static str,
    pub items: Vec<ListingView>,
}

/// Response body for `GET /boards/{slug}`.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub seller: SellerPublicView,
    /// Most recent item update, for the "Updated ..." stamp.
    pub last_updated: Option<Timestamp>,
    /// Fresh arrivals; empty whenever the view is narrowed by a filter.
    pub just_in: Vec<ListingView>,
    pub groups: Vec<CategoryGroup>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/boards/{slug}
pub async fn public_board(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<BoardParams>,
) -> AppResult<Json<BoardResponse>> {
    let seller = find_board_seller(&state, &slug).await?;

    if let Some(category) = params.category.as_deref() {
        if !is_valid_category(category) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "unknown category \"{category}\""
            ))));
        }
    }

    let rows = ListingRepo::list_board(&state.pool, seller.id).await?;
    let ids: Vec<DbId> = rows.iter().map(|r| r.item.id).collect();
    let photos = ListingPhotoRepo::list_for_items(&state.pool, &ids).await?;
    let mut photos_by_item: HashMap<DbId, Vec<ListingPhoto>> = HashMap::new();
    for photo in photos {
        photos_by_item
            .entry(photo.listing_item_id)
            .or_default()
            .push(photo);
    }

    let filter = BoardFilter {
        search: params.q.clone(),
        category: params.category.clone(),
        show_sold_out: params.show_sold_out,
    };
    let now = Utc::now();

    let view_of = |row: &BoardRow| {
        let photos = photos_by_item.get(&row.item.id).cloned().unwrap_or_default();
        listing_view(row.clone(), photos, now)
    };

    let fresh: Vec<ListingView> = just_in(&rows, &filter, now).into_iter().map(view_of).collect();

    let filtered = filter_items(&rows, &filter);
    let groups = group_by_category(filtered)
        .into_iter()
        .map(|(category, items)| {
            let label = category_label(&category);
            CategoryGroup {
                items: items.into_iter().map(view_of).collect(),
                category,
                label,
            }
        })
        .collect();

    let last_updated = ListingRepo::last_updated(&state.pool, seller.id).await?;

    Ok(Json(BoardResponse {
        seller: SellerPublicView::from(&seller),
        last_updated,
        just_in: fresh,
        groups,
    }))
}

/// POST /api/v1/boards/{slug}/items/{id}/notify
///
/// Record a buyer's restock-notification request. Append-only; fulfillment
/// happens out of band. Archived items and items of other sellers read as
/// absent.
pub async fn notify(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, DbId)>,
    Json(input): Json<CreateNotifyRequest>,
) -> AppResult<(StatusCode, Json<NotifyRequest>)> {
    let email = input
        .buyer_email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());
    let phone = input
        .buyer_phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    if email.is_none() && phone.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "an email address or phone number is required".into(),
        )));
    }
    if let Some(email) = email {
        if !email.contains('@') {
            return Err(AppError::Core(CoreError::Validation(
                "buyer_email is not a valid email address".into(),
            )));
        }
    }

    let seller = find_board_seller(&state, &slug).await?;
    let item = ListingRepo::find_for_seller(&state.pool, id, seller.id)
        .await?
        .filter(|item| !item.is_archived)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id,
        }))?;

    let request = NotifyRequestRepo::create(&state.pool, item.id, email, phone).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_board_seller(state: &AppState, slug: &str) -> AppResult<Seller> {
    SellerRepo::find_by_slug(&state.pool, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No board at \"{slug}\"")))
}
