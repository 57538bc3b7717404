//! Handlers for the `/auth` resource (seller onboarding and login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stockboard_core::error::CoreError;
use stockboard_core::slug::{is_valid_slug, slugify};
use stockboard_db::models::seller::{CreateSeller, Seller};
use stockboard_db::repositories::SellerRepo;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, max = 120))]
    pub business_name: String,
    /// Storefront path. Derived from the business name when omitted.
    pub slug: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub seller: Seller,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Onboard a new seller on the free tier. The slug is fixed here; the
/// profile API never changes it afterwards. A taken slug or email surfaces
/// as 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LEN)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let slug = match input.slug.as_deref() {
        Some(slug) => {
            if !is_valid_slug(slug) {
                return Err(AppError::Core(CoreError::Validation(
                    "slug may only contain lowercase letters, digits, and single dashes".into(),
                )));
            }
            slug.to_string()
        }
        None => {
            let derived = slugify(&input.business_name);
            if derived.is_empty() {
                return Err(AppError::Core(CoreError::Validation(
                    "business_name yields no usable slug; provide one explicitly".into(),
                )));
            }
            derived
        }
    };

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateSeller {
        email: input.email,
        password_hash,
        business_name: input.business_name,
        slug,
    };
    // Duplicate email/slug hits uq_sellers_email / uq_sellers_slug -> 409.
    let seller = SellerRepo::create(&state.pool, &create).await?;

    let response = auth_response(&state, seller)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let seller = SellerRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &seller.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = auth_response(&state, seller)?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate an access token and build the response envelope.
fn auth_response(state: &AppState, seller: Seller) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(seller.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        seller,
    })
}
