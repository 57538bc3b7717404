//! Handlers for the authenticated `/shipments` resource.
//!
//! Shipments are batch markers: items reference them, and the board derives
//! the "Just In" highlight from the arrival date. Freshness is computed on
//! every read, never stored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use stockboard_core::error::CoreError;
use stockboard_core::freshness::is_just_in;
use stockboard_core::types::{DbId, Timestamp};
use stockboard_db::models::shipment::{CreateShipment, Shipment};
use stockboard_db::repositories::ShipmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSeller;
use crate::state::AppState;

/// A shipment with its derived freshness flag.
#[derive(Debug, Serialize)]
pub struct ShipmentView {
    #[serde(flatten)]
    pub shipment: Shipment,
    pub just_in: bool,
}

fn shipment_view(shipment: Shipment, now: Timestamp) -> ShipmentView {
    let just_in = is_just_in(shipment.arrival_date, now);
    ShipmentView { shipment, just_in }
}

/// POST /api/v1/shipments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthSeller,
    Json(input): Json<CreateShipment>,
) -> AppResult<(StatusCode, Json<ShipmentView>)> {
    let shipment = ShipmentRepo::create(&state.pool, auth.seller_id, &input).await?;
    Ok((StatusCode::CREATED, Json(shipment_view(shipment, Utc::now()))))
}

/// GET /api/v1/shipments
pub async fn list(
    State(state): State<AppState>,
    auth: AuthSeller,
) -> AppResult<Json<Vec<ShipmentView>>> {
    let now = Utc::now();
    let shipments = ShipmentRepo::list_for_seller(&state.pool, auth.seller_id).await?;
    let views = shipments
        .into_iter()
        .map(|s| shipment_view(s, now))
        .collect();
    Ok(Json(views))
}

/// GET /api/v1/shipments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthSeller,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShipmentView>> {
    let shipment = ShipmentRepo::find_for_seller(&state.pool, id, auth.seller_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Shipment",
            id,
        }))?;
    Ok(Json(shipment_view(shipment, Utc::now())))
}
