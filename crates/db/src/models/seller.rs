//! Seller models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockboard_core::types::{DbId, Timestamp};

use crate::models::patch::patch_field;

/// A row from the `sellers` table.
///
/// The password hash never serializes; handlers that need a public view
/// (the board header) project the contact fields into their own struct.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Seller {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
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
    pub plan_tier: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new seller (built by the register handler after
/// hashing the password and resolving the slug).
#[derive(Debug, Clone)]
pub struct CreateSeller {
    pub email: String,
    pub password_hash: String,
    pub business_name: String,
    pub slug: String,
}

/// Partial profile patch. The slug is deliberately absent: it is fixed at
/// onboarding and only changeable through support.
///
/// Nullable columns are tri-state ([`patch_field`]): an explicit `null`
/// clears the field (e.g. removing a bio or a contact method), an absent
/// key keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSellerProfile {
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    pub location_city: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub location_state: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub profile_photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub contact_phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub contact_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub contact_instagram: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub contact_facebook: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub contact_website: Option<Option<String>>,
    pub ships: Option<bool>,
    pub plan_tier: Option<String>,
}
