//! Board assembly: filtering, "Just In" selection, and category grouping.
//!
//! Operates on anything implementing [`BoardListing`] so the same rules
//! serve the public board, the seller dashboard, and unit tests with plain
//! structs. Archived items never surface here regardless of filters.

use crate::freshness::is_just_in;
use crate::listing::category_rank;
use crate::types::Timestamp;

/// Read-only view of a listing item as the board needs it.
pub trait BoardListing {
    fn common_name(&self) -> &str;
    fn scientific_name(&self) -> Option<&str>;
    fn notes(&self) -> Option<&str>;
    fn category(&self) -> &str;
    fn is_archived(&self) -> bool;
    /// The shared availability predicate (`listing::is_available`).
    fn is_available(&self) -> bool;
    fn sort_order(&self) -> i32;
    fn created_at(&self) -> Timestamp;
    /// Arrival date of the item's shipment, if it belongs to one.
    fn shipment_arrival(&self) -> Option<Timestamp>;
}

/// Independent, composable board filters.
#[derive(Debug, Clone, Default)]
pub struct BoardFilter {
    /// Case-insensitive substring over common name, scientific name, notes.
    pub search: Option<String>,
    /// Restrict to a single category; `None` means all.
    pub category: Option<String>,
    /// Include unavailable (sold out / inactive) items.
    pub show_sold_out: bool,
}

impl BoardFilter {
    /// Whether a search or category filter narrows the view. The "Just In"
    /// highlight is a discovery aid for the unnarrowed view only.
    pub fn is_narrowed(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.category.is_some()
    }
}

fn matches_search(item: &impl BoardListing, query: &str) -> bool {
    let q = query.to_lowercase();
    item.common_name().to_lowercase().contains(&q)
        || item
            .scientific_name()
            .is_some_and(|s| s.to_lowercase().contains(&q))
        || item.notes().is_some_and(|n| n.to_lowercase().contains(&q))
}

fn matches(item: &impl BoardListing, filter: &BoardFilter) -> bool {
    if item.is_archived() {
        return false;
    }
    if !filter.show_sold_out && !item.is_available() {
        return false;
    }
    if let Some(category) = &filter.category {
        if item.category() != category {
            return false;
        }
    }
    if let Some(search) = filter.search.as_deref() {
        let search = search.trim();
        if !search.is_empty() && !matches_search(item, search) {
            return false;
        }
    }
    true
}

/// Apply the board filters, preserving input order.
pub fn filter_items<'a, T: BoardListing>(items: &'a [T], filter: &BoardFilter) -> Vec<&'a T> {
    items.iter().filter(|i| matches(*i, filter)).collect()
}

/// Available items whose shipment is still fresh at `now`.
///
/// Returns an empty list whenever the filter narrows the view: the highlight
/// only decorates the default board.
pub fn just_in<'a, T: BoardListing>(
    items: &'a [T],
    filter: &BoardFilter,
    now: Timestamp,
) -> Vec<&'a T> {
    if filter.is_narrowed() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|i| {
            !i.is_archived()
                && i.is_available()
                && i.shipment_arrival().is_some_and(|arrival| is_just_in(arrival, now))
        })
        .collect()
}

/// Group filtered items by category for display.
///
/// Groups follow the canonical category order; within a group the seller's
/// sort order ascends, ties broken by most-recent creation first.
pub fn group_by_category<'a, T: BoardListing>(
    mut items: Vec<&'a T>,
) -> Vec<(String, Vec<&'a T>)> {
    items.sort_by(|a, b| {
        category_rank(a.category())
            .cmp(&category_rank(b.category()))
            .then_with(|| a.sort_order().cmp(&b.sort_order()))
            .then_with(|| b.created_at().cmp(&a.created_at()))
    });

    let mut groups: Vec<(String, Vec<&'a T>)> = Vec::new();
    for item in items {
        match groups.last_mut() {
            Some((category, group)) if category == item.category() => group.push(item),
            _ => groups.push((item.category().to_string(), vec![item])),
        }
    }
    groups
}
