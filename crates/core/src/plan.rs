//! Plan tier policy: subscription tier to numeric ceilings.
//!
//! Pure mapping consulted by the listing handlers *before* any insert, so a
//! ceiling breach never leaves a partial write. Archived items do not count
//! toward the item ceiling.

/// Free tier name (default for new sellers).
pub const TIER_FREE: &str = "free";

/// Pro tier name.
pub const TIER_PRO: &str = "pro";

/// Shop tier name (unbounded item count).
pub const TIER_SHOP: &str = "shop";

/// Valid plan tiers.
pub const PLAN_TIERS: &[&str] = &[TIER_FREE, TIER_PRO, TIER_SHOP];

/// Check whether a tier name is one of the known plan tiers.
pub fn is_valid_tier(tier: &str) -> bool {
    PLAN_TIERS.contains(&tier)
}

/// Numeric ceilings for a plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    /// Maximum non-archived listing items. `None` means unbounded.
    pub max_items: Option<i64>,
    /// Maximum photos per listing item.
    pub max_photos: i64,
}

/// Resolve the ceilings for a tier.
///
/// Unknown tier names fall back to the free tier's limits rather than
/// erroring, so a bad row can never unlock unlimited items.
pub fn limits_for(tier: &str) -> PlanLimits {
    match tier {
        TIER_PRO => PlanLimits {
            max_items: Some(100),
            max_photos: 3,
        },
        TIER_SHOP => PlanLimits {
            max_items: None,
            max_photos: 5,
        },
        _ => PlanLimits {
            max_items: Some(25),
            max_photos: 1,
        },
    }
}

/// Whether a seller on `tier` may create one more listing item given their
/// current count of non-archived items.
pub fn can_add_item(tier: &str, current_active_count: i64) -> bool {
    match limits_for(tier).max_items {
        Some(max) => current_active_count < max,
        None => true,
    }
}

/// Whether one more photo may be attached to an item given its current
/// photo count.
pub fn can_add_photo(tier: &str, current_photo_count: i64) -> bool {
    current_photo_count < limits_for(tier).max_photos
}
