//! Find where a new activity of a given length fits in the day.
//!
//! Slides a window of `ceil(duration / 15)` slots over the raw 15-minute grid
//! and takes the first window in which every slot is free.

use tracing::debug;

use crate::model::TimeSlot;
use crate::time::{ceil_slots, WallClock};

/// Find the earliest free window long enough for `duration_minutes`.
///
/// With `preferred_start`, only windows starting at or after it are considered;
/// an earlier free window is never returned as a fallback. `None` means no
/// suitable time exists, which is an ordinary outcome rather than an error.
/// A zero duration also yields `None`.
///
/// `slots` must be the ungrouped grid from [`crate::generate_slots`]. Windows
/// that straddle a gap in the sequence (`slot[i].end != slot[i + 1].start`)
/// are rejected.
pub fn find_slot(
    slots: &[TimeSlot],
    duration_minutes: u32,
    preferred_start: Option<WallClock>,
) -> Option<TimeSlot> {
    let needed = ceil_slots(duration_minutes);
    if needed == 0 || needed > slots.len() {
        debug!(duration_minutes, slots = slots.len(), "no window can fit duration");
        return None;
    }

    let found = slots
        .windows(needed)
        .filter(|window| preferred_start.is_none_or(|preferred| window[0].start >= preferred))
        .find(|window| is_feasible(window))
        .map(|window| TimeSlot {
            start: window[0].start,
            end: window[needed - 1].end,
            available: true,
        });

    match &found {
        Some(slot) => debug!(
            duration_minutes,
            start = %slot.start,
            end = %slot.end,
            "placed activity"
        ),
        None => debug!(duration_minutes, "no suitable time slot"),
    }

    found
}

/// Every slot free and each slot starting where the previous one ends.
fn is_feasible(window: &[TimeSlot]) -> bool {
    window.iter().all(|slot| slot.available)
        && window.windows(2).all(|pair| pair[0].end == pair[1].start)
}
