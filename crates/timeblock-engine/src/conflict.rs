//! Detect overlaps between a candidate interval and existing bookings.
//!
//! Intervals are half-open: `[start, end)`. A booking that ends exactly when
//! another starts does NOT conflict with it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Booking, ScheduleItem};
use crate::time::WallClock;

/// Outcome of [`check_conflicts`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResult {
    pub has_conflict: bool,
    /// Items of every overlapping booking, in booking order. Not deduplicated.
    pub conflicting_items: Vec<ScheduleItem>,
}

/// Whether `[start_a, end_a)` and `[start_b, end_b)` overlap.
///
/// Two intervals overlap when `start_a < end_b && start_b < end_a`. A
/// zero-length interval (`start == end`) never overlaps anything. Reversed
/// intervals are not rejected here and go through the same formula.
pub fn overlaps(
    start_a: WallClock,
    end_a: WallClock,
    start_b: WallClock,
    end_b: WallClock,
) -> bool {
    if start_a == end_a || start_b == end_b {
        return false;
    }
    start_a < end_b && start_b < end_a
}

/// Whether `[start, end)` overlaps any booking.
pub fn is_occupied(start: WallClock, end: WallClock, bookings: &[Booking]) -> bool {
    bookings.iter().any(|b| b.overlaps(start, end))
}

/// Check a candidate booking against the bookings already on the schedule.
///
/// `exclude_id` skips one booking, so a booking being moved does not collide
/// with its own old position. Items from every overlapping booking are
/// collected in iteration order.
///
/// The candidate is taken as given; use [`crate::planner::can_book`] to reject
/// reversed or empty candidates first.
///
/// The result is advisory: it reflects `bookings` at call time only. A
/// concurrent writer can still book the same interval before the caller
/// persists, so storage must enforce its own overlap constraint.
pub fn check_conflicts(
    candidate_start: WallClock,
    candidate_end: WallClock,
    bookings: &[Booking],
    exclude_id: Option<&str>,
) -> ConflictResult {
    let mut result = ConflictResult::default();

    for booking in bookings {
        if exclude_id == Some(booking.id.as_str()) {
            continue;
        }
        if booking.overlaps(candidate_start, candidate_end) {
            result.has_conflict = true;
            result.conflicting_items.extend(booking.items.iter().cloned());
        }
    }

    debug!(
        start = %candidate_start,
        end = %candidate_end,
        bookings = bookings.len(),
        has_conflict = result.has_conflict,
        items = result.conflicting_items.len(),
        "checked candidate booking for conflicts"
    );

    result
}
