//! Display-string derivation for prices and quantities.
//!
//! Pure functions of the raw fields; the API serializes these alongside the
//! entity so every client renders identical text.

use crate::listing::Quantity;

/// Format an optional low/high price range.
///
/// Both bounds absent means the seller wants to be contacted; a single bound
/// (or an equal pair) renders as one price; otherwise a range with an en dash.
pub fn format_price(low: Option<f64>, high: Option<f64>) -> String {
    match (low, high) {
        (None, None) => "Contact for price".to_string(),
        (Some(low), None) => format!("${low}"),
        (None, Some(high)) => format!("${high}"),
        (Some(low), Some(high)) if low == high => format!("${low}"),
        (Some(low), Some(high)) => format!("${low}–${high}"),
    }
}

/// Format a quantity for display.
pub fn format_quantity(quantity: &Quantity) -> String {
    match quantity {
        Quantity::Exact(n) => format!("{n} available"),
        Quantity::Qualitative(label) => label.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::QuantityLabel;

    #[test]
    fn no_bounds_means_contact_for_price() {
        assert_eq!(format_price(None, None), "Contact for price");
    }

    #[test]
    fn single_bound_renders_one_price() {
        assert_eq!(format_price(Some(10.0), None), "$10");
        assert_eq!(format_price(None, Some(15.0)), "$15");
    }

    #[test]
    fn equal_bounds_render_one_price() {
        assert_eq!(format_price(Some(10.0), Some(10.0)), "$10");
    }

    #[test]
    fn distinct_bounds_render_a_range() {
        assert_eq!(format_price(Some(10.0), Some(15.0)), "$10–$15");
    }

    #[test]
    fn fractional_prices_keep_their_cents() {
        assert_eq!(format_price(Some(2.5), None), "$2.5");
    }

    #[test]
    fn exact_quantity_display() {
        assert_eq!(format_quantity(&Quantity::Exact(4)), "4 available");
    }

    #[test]
    fn qualitative_quantity_display() {
        assert_eq!(
            format_quantity(&Quantity::Qualitative(QuantityLabel::ComingSoon)),
            "Coming Soon"
        );
        assert_eq!(
            format_quantity(&Quantity::Qualitative(QuantityLabel::SoldOut)),
            "Sold Out"
        );
    }
}
