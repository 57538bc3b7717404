//! Serializable view structs derived from entity rows.
//!
//! Display strings (price, quantity) and derived flags (availability,
//! "Just In") are computed server-side so every client renders identical
//! text, per `stockboard_core::format`.

use std::collections::HashMap;

use serde::Serialize;
use stockboard_core::format::{format_price, format_quantity};
use stockboard_core::freshness::is_just_in;
use stockboard_core::types::{DbId, Timestamp};
use stockboard_db::models::listing::{BoardRow, ListingItem, ListingPhoto};
use stockboard_db::models::seller::Seller;

/// A listing item decorated for board and dashboard rendering.
#[derive(Debug, Serialize)]
pub struct ListingView {
    #[serde(flatten)]
    pub item: ListingItem,
    pub photos: Vec<ListingPhoto>,
    pub available: bool,
    pub just_in: bool,
    pub price_display: String,
    pub quantity_display: String,
    pub shipment_label: Option<String>,
}

/// Build a [`ListingView`] from a joined board row and its photos.
pub fn listing_view(row: BoardRow, photos: Vec<ListingPhoto>, now: Timestamp) -> ListingView {
    let available = row.item.availability();
    let just_in = available
        && row
            .shipment_arrival
            .is_some_and(|arrival| is_just_in(arrival, now));
    let price_display = format_price(row.item.price_low, row.item.price_high);
    // A row with an undecodable quantity branch already reads as unavailable.
    let quantity_display = row
        .item
        .quantity()
        .map(|q| format_quantity(&q))
        .unwrap_or_else(|_| "Sold Out".to_string());

    ListingView {
        item: row.item,
        photos,
        available,
        just_in,
        price_display,
        quantity_display,
        shipment_label: row.shipment_label,
    }
}

/// Build views for a set of rows, stitching each row's photos onto it.
pub fn listing_views(
    rows: Vec<BoardRow>,
    photos: Vec<ListingPhoto>,
    now: Timestamp,
) -> Vec<ListingView> {
    let mut by_item: HashMap<DbId, Vec<ListingPhoto>> = HashMap::new();
    for photo in photos {
        by_item.entry(photo.listing_item_id).or_default().push(photo);
    }
    rows.into_iter()
        .map(|row| {
            let photos = by_item.remove(&row.item.id).unwrap_or_default();
            listing_view(row, photos, now)
        })
        .collect()
}

/// A single item with photos and display fields, as returned by
/// `GET /listings/{id}`.
#[derive(Debug, Serialize)]
pub struct ItemDetail {
    #[serde(flatten)]
    pub item: ListingItem,
    pub photos: Vec<ListingPhoto>,
    pub available: bool,
    pub price_display: String,
    pub quantity_display: String,
}

/// Build an [`ItemDetail`] from an item row and its photos.
pub fn item_detail(item: ListingItem, photos: Vec<ListingPhoto>) -> ItemDetail {
    let available = item.availability();
    let price_display = format_price(item.price_low, item.price_high);
    let quantity_display = item
        .quantity()
        .map(|q| format_quantity(&q))
        .unwrap_or_else(|_| "Sold Out".to_string());

    ItemDetail {
        item,
        photos,
        available,
        price_display,
        quantity_display,
    }
}

/// The seller profile as buyers see it on the public board. Login email,
/// plan tier, and timestamps stay private.
#[derive(Debug, Serialize)]
pub struct SellerPublicView {
    pub business_name: String,
    pub slug: String,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub contact_instagram: Option<String>,
    pub contact_facebook: Option<String>,
    pub contact_website: Option<String>,
    pub ships: bool,
}

impl From<&Seller> for SellerPublicView {
    fn from(seller: &Seller) -> Self {
        Self {
            business_name: seller.business_name.clone(),
            slug: seller.slug.clone(),
            location_city: seller.location_city.clone(),
            location_state: seller.location_state.clone(),
            bio: seller.bio.clone(),
            profile_photo_url: seller.profile_photo_url.clone(),
            contact_phone: seller.contact_phone.clone(),
            contact_email: seller.contact_email.clone(),
            contact_instagram: seller.contact_instagram.clone(),
            contact_facebook: seller.contact_facebook.clone(),
            contact_website: seller.contact_website.clone(),
            ships: seller.ships,
        }
    }
}
