//! Repository for the `sellers` table.

use sqlx::PgPool;
use stockboard_core::types::DbId;

use crate::models::seller::{CreateSeller, Seller, UpdateSellerProfile};

/// Column list for `sellers` queries.
const SELLER_COLUMNS: &str = "\
    id, email, password_hash, business_name, slug, \
    location_city, location_state, bio, profile_photo_url, \
    contact_phone, contact_email, contact_instagram, contact_facebook, contact_website, \
    ships, plan_tier, created_at, updated_at";

/// Provides data access for sellers.
pub struct SellerRepo;

impl SellerRepo {
    /// Insert a new seller on the free tier.
    ///
    /// A duplicate email or slug surfaces as a unique-constraint violation
    /// (`uq_sellers_email` / `uq_sellers_slug`), which the API maps to 409.
    pub async fn create(pool: &PgPool, dto: &CreateSeller) -> Result<Seller, sqlx::Error> {
        let query = format!(
            "INSERT INTO sellers (email, password_hash, business_name, slug) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SELLER_COLUMNS}"
        );
        sqlx::query_as::<_, Seller>(&query)
            .bind(&dto.email)
            .bind(&dto.password_hash)
            .bind(&dto.business_name)
            .bind(&dto.slug)
            .fetch_one(pool)
            .await
    }

    /// Find a seller by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Seller>, sqlx::Error> {
        let query = format!("SELECT {SELLER_COLUMNS} FROM sellers WHERE id = $1");
        sqlx::query_as::<_, Seller>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a seller by login email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Seller>, sqlx::Error> {
        let query = format!("SELECT {SELLER_COLUMNS} FROM sellers WHERE email = $1");
        sqlx::query_as::<_, Seller>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a seller by public board slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Seller>, sqlx::Error> {
        let query = format!("SELECT {SELLER_COLUMNS} FROM sellers WHERE slug = $1");
        sqlx::query_as::<_, Seller>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a seller's profile.
    ///
    /// Non-nullable fields use `COALESCE`; nullable fields are tri-state
    /// (provided-flag plus value, so an explicit `null` clears the column).
    /// The slug is never touched here.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSellerProfile,
    ) -> Result<Option<Seller>, sqlx::Error> {
        let query = format!(
            "UPDATE sellers SET \
                 business_name = COALESCE($2, business_name), \
                 location_city = CASE WHEN $3 THEN $4 ELSE location_city END, \
                 location_state = CASE WHEN $5 THEN $6 ELSE location_state END, \
                 bio = CASE WHEN $7 THEN $8 ELSE bio END, \
                 profile_photo_url = CASE WHEN $9 THEN $10 ELSE profile_photo_url END, \
                 contact_phone = CASE WHEN $11 THEN $12 ELSE contact_phone END, \
                 contact_email = CASE WHEN $13 THEN $14 ELSE contact_email END, \
                 contact_instagram = CASE WHEN $15 THEN $16 ELSE contact_instagram END, \
                 contact_facebook = CASE WHEN $17 THEN $18 ELSE contact_facebook END, \
                 contact_website = CASE WHEN $19 THEN $20 ELSE contact_website END, \
                 ships = COALESCE($21, ships), \
                 plan_tier = COALESCE($22, plan_tier), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {SELLER_COLUMNS}"
        );
        sqlx::query_as::<_, Seller>(&query)
            .bind(id)
            .bind(&dto.business_name)
            .bind(dto.location_city.is_some())
            .bind(dto.location_city.clone().flatten())
            .bind(dto.location_state.is_some())
            .bind(dto.location_state.clone().flatten())
            .bind(dto.bio.is_some())
            .bind(dto.bio.clone().flatten())
            .bind(dto.profile_photo_url.is_some())
            .bind(dto.profile_photo_url.clone().flatten())
            .bind(dto.contact_phone.is_some())
            .bind(dto.contact_phone.clone().flatten())
            .bind(dto.contact_email.is_some())
            .bind(dto.contact_email.clone().flatten())
            .bind(dto.contact_instagram.is_some())
            .bind(dto.contact_instagram.clone().flatten())
            .bind(dto.contact_facebook.is_some())
            .bind(dto.contact_facebook.clone().flatten())
            .bind(dto.contact_website.is_some())
            .bind(dto.contact_website.clone().flatten())
            .bind(dto.ships)
            .bind(&dto.plan_tier)
            .fetch_optional(pool)
            .await
    }
}
