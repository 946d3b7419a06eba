//! One-call entry points for the request handlers.
//!
//! Each function takes the bookings already fetched for one schedule and day.
//! Fetching them (and falling back to an empty list when that fails) is the
//! caller's job.

use crate::collapse::collapse;
use crate::config::SchedulerConfig;
use crate::conflict::{check_conflicts, ConflictResult};
use crate::error::{Result, TimeblockError};
use crate::grid::generate_slots;
use crate::model::{Booking, TimeSlot};
use crate::placement::find_slot;
use crate::time::WallClock;

/// The day timeline: the grid for the configured hours, with long free runs
/// merged.
pub fn day_view(config: &SchedulerConfig, bookings: &[Booking]) -> Result<Vec<TimeSlot>> {
    config.validate()?;
    let grid = generate_slots(config.start_hour, config.end_hour, bookings)?;
    Ok(collapse(&grid, config.min_empty_group))
}

/// Suggest a time for an activity of `duration_minutes`, optionally no
/// earlier than `preferred_start`. `Ok(None)` means nothing fits.
pub fn suggest_slot(
    config: &SchedulerConfig,
    bookings: &[Booking],
    duration_minutes: u32,
    preferred_start: Option<WallClock>,
) -> Result<Option<TimeSlot>> {
    config.validate()?;
    let grid = generate_slots(config.start_hour, config.end_hour, bookings)?;
    Ok(find_slot(&grid, duration_minutes, preferred_start))
}

/// Validate a new or moved time block and report what it collides with.
///
/// # Errors
/// Returns `TimeblockError::InvalidInterval` when `end <= start`.
pub fn can_book(
    start: WallClock,
    end: WallClock,
    bookings: &[Booking],
    exclude_id: Option<&str>,
) -> Result<ConflictResult> {
    if end <= start {
        return Err(TimeblockError::InvalidInterval {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(check_conflicts(start, end, bookings, exclude_id))
}
