//! Shipment freshness: the "Just In" window.
//!
//! Freshness is derived from wall-clock time on every read and never stored,
//! so a badge cannot go stale in the database. Callers inject `now` instead
//! of reading the clock here, which keeps the boundary testable.

use chrono::Duration;

use crate::types::Timestamp;

/// Hours after arrival during which a shipment counts as "Just In".
pub const JUST_IN_WINDOW_HOURS: i64 = 72;

/// Whether a shipment that arrived at `arrival` is still fresh at `now`.
///
/// The boundary is inclusive: exactly 72 hours after arrival is still fresh.
pub fn is_just_in(arrival: Timestamp, now: Timestamp) -> bool {
    now.signed_duration_since(arrival) <= Duration::hours(JUST_IN_WINDOW_HOURS)
}
