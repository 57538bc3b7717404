//! Listing item domain model: quantity branches, the availability
//! predicate, and lifecycle transitions.
//!
//! The quantity columns in `listing_items` are a pair of optional fields
//! disambiguated by `quantity_type`. This module folds them into the tagged
//! [`Quantity`] union so the illegal "both set" / "neither set" states are
//! unrepresentable once a row has passed [`Quantity::from_parts`].

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Valid listing categories, in canonical display order.
pub const CATEGORIES: &[&str] = &[
    "freshwater_fish",
    "saltwater_fish",
    "coral_frags",
    "invertebrates",
    "live_plants",
    "other",
];

/// Check whether a category name is one of the known categories.
pub fn is_valid_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

/// Position of a category in the canonical order (unknown sorts last).
pub fn category_rank(category: &str) -> usize {
    CATEGORIES
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORIES.len())
}

/// Human-readable label for a category.
pub fn category_label(category: &str) -> &'static str {
    match category {
        "freshwater_fish" => "Freshwater Fish",
        "saltwater_fish" => "Saltwater Fish",
        "coral_frags" => "Coral & Frags",
        "invertebrates" => "Invertebrates",
        "live_plants" => "Live Plants",
        _ => "Other",
    }
}

// ---------------------------------------------------------------------------
// Quantity
// ---------------------------------------------------------------------------

/// Wire/storage name of the exact quantity branch.
pub const QUANTITY_TYPE_EXACT: &str = "exact";

/// Wire/storage name of the qualitative quantity branch.
pub const QUANTITY_TYPE_QUALITATIVE: &str = "qualitative";

/// Maximum length of the free-text notes field.
pub const MAX_NOTES_LEN: usize = 500;

/// Qualitative stock level for listings without an exact count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityLabel {
    InStock,
    Limited,
    SoldOut,
    ComingSoon,
}

impl QuantityLabel {
    /// Parse a storage/wire label name.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "in_stock" => Some(Self::InStock),
            "limited" => Some(Self::Limited),
            "sold_out" => Some(Self::SoldOut),
            "coming_soon" => Some(Self::ComingSoon),
            _ => None,
        }
    }

    /// Storage/wire name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::Limited => "limited",
            Self::SoldOut => "sold_out",
            Self::ComingSoon => "coming_soon",
        }
    }

    /// Human-readable display string.
    pub fn display(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::Limited => "Limited",
            Self::SoldOut => "Sold Out",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

/// Stock quantity of a listing item. Exactly one branch is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Counted stock; zero or negative means sold out.
    Exact(i32),
    /// Qualitative stock level.
    Qualitative(QuantityLabel),
}

impl Quantity {
    /// Fold the three storage fields into a [`Quantity`].
    ///
    /// The branch named by `quantity_type` is authoritative: its field must
    /// be present, and the other branch's field is ignored. This is also the
    /// merge rule for partial updates -- after a patch, whatever
    /// `quantity_type` ends up being decides which field survives.
    pub fn from_parts(
        quantity_type: &str,
        exact: Option<i32>,
        label: Option<&str>,
    ) -> Result<Self, CoreError> {
        match quantity_type {
            QUANTITY_TYPE_EXACT => {
                let n = exact.ok_or_else(|| {
                    CoreError::Validation(
                        "quantity_exact is required when quantity_type is \"exact\"".into(),
                    )
                })?;
                if n < 0 {
                    return Err(CoreError::Validation(
                        "quantity_exact must not be negative".into(),
                    ));
                }
                Ok(Self::Exact(n))
            }
            QUANTITY_TYPE_QUALITATIVE => {
                let raw = label.ok_or_else(|| {
                    CoreError::Validation(
                        "quantity_label is required when quantity_type is \"qualitative\"".into(),
                    )
                })?;
                let parsed = QuantityLabel::parse(raw).ok_or_else(|| {
                    CoreError::Validation(format!("unknown quantity_label \"{raw}\""))
                })?;
                Ok(Self::Qualitative(parsed))
            }
            other => Err(CoreError::Validation(format!(
                "quantity_type must be \"exact\" or \"qualitative\", got \"{other}\""
            ))),
        }
    }

    /// Normalized storage fields `(quantity_type, quantity_exact,
    /// quantity_label)`. The inactive branch is always `None`.
    pub fn to_parts(&self) -> (&'static str, Option<i32>, Option<&'static str>) {
        match self {
            Self::Exact(n) => (QUANTITY_TYPE_EXACT, Some(*n), None),
            Self::Qualitative(label) => (QUANTITY_TYPE_QUALITATIVE, None, Some(label.as_str())),
        }
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// The single availability predicate.
///
/// Every consumer (dashboard stats, public board filtering, badge rendering)
/// goes through this function; nothing recomputes its own variant.
pub fn is_available(quantity: &Quantity, is_active: bool, is_archived: bool) -> bool {
    if !is_active || is_archived {
        return false;
    }
    match quantity {
        Quantity::Exact(n) => *n > 0,
        Quantity::Qualitative(label) => *label != QuantityLabel::SoldOut,
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Outcome of the seller-facing availability toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingTransition {
    /// Terminal: set `is_archived = true`. No transition leaves this state.
    Archive,
    /// Flip the active switch to the given value.
    SetActive(bool),
}

/// Decide what toggling availability does to an item.
///
/// A WYSIWYG item that is currently available is a single physical unit
/// being marked sold, so it archives outright instead of going inactive.
/// Everything else flips `is_active`, which is its own inverse.
pub fn toggle_transition(
    is_wysiwyg: bool,
    currently_available: bool,
    is_active: bool,
) -> ListingTransition {
    if is_wysiwyg && currently_available {
        ListingTransition::Archive
    } else {
        ListingTransition::SetActive(!is_active)
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate the required descriptive fields of a new or patched listing.
pub fn validate_descriptive_fields(
    category: &str,
    common_name: &str,
    notes: Option<&str>,
) -> Result<(), CoreError> {
    if !is_valid_category(category) {
        return Err(CoreError::Validation(format!(
            "unknown category \"{category}\""
        )));
    }
    if common_name.trim().is_empty() {
        return Err(CoreError::Validation("common_name is required".into()));
    }
    if let Some(notes) = notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(CoreError::Validation(format!(
                "notes must be at most {MAX_NOTES_LEN} characters"
            )));
        }
    }
    Ok(())
}
