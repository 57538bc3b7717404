//! Handlers for the authenticated `/seller` resource.

use axum::extract::State;
use axum::Json;
use stockboard_core::error::CoreError;
use stockboard_core::plan::is_valid_tier;
use stockboard_db::models::seller::{Seller, UpdateSellerProfile};
use stockboard_db::repositories::SellerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSeller;
use crate::state::AppState;

/// GET /api/v1/seller/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthSeller,
) -> AppResult<Json<Seller>> {
    let seller = SellerRepo::find_by_id(&state.pool, auth.seller_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Seller",
            id: auth.seller_id,
        }))?;
    Ok(Json(seller))
}

/// PUT /api/v1/seller/profile
///
/// Partial profile update. The slug is not part of the payload: it is fixed
/// at onboarding.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthSeller,
    Json(input): Json<UpdateSellerProfile>,
) -> AppResult<Json<Seller>> {
    if let Some(tier) = input.plan_tier.as_deref() {
        if !is_valid_tier(tier) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "unknown plan tier \"{tier}\""
            ))));
        }
    }
    if let Some(name) = input.business_name.as_deref() {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "business_name must not be empty".into(),
            )));
        }
    }

    let seller = SellerRepo::update_profile(&state.pool, auth.seller_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Seller",
            id: auth.seller_id,
        }))?;
    Ok(Json(seller))
}
