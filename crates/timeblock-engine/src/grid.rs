//! Generate the 15-minute slot grid for a day.
//!
//! Hours run from `start_hour` to `end_hour` inclusive, four slots per hour.
//! A slot whose end would land in the hour after `end_hour` is dropped rather
//! than shortened, so with `end_hour = 10` the last slot is `10:30-10:45`.

use tracing::debug;

use crate::conflict::is_occupied;
use crate::error::{Result, TimeblockError};
use crate::model::{Booking, TimeSlot};
use crate::time::{WallClock, SLOT_MINUTES};

/// Check that `start_hour..=end_hour` is a usable operating window.
pub fn validate_hours(start_hour: u32, end_hour: u32) -> Result<()> {
    if start_hour > 23 || end_hour > 23 || start_hour > end_hour {
        return Err(TimeblockError::InvalidHourRange {
            start: start_hour,
            end: end_hour,
        });
    }
    Ok(())
}

/// Build the slot grid for `start_hour..=end_hour`, marking every slot that
/// overlaps a booking (even partially) as unavailable.
///
/// An empty `bookings` slice yields a fully available grid.
///
/// # Errors
/// Returns `TimeblockError::InvalidHourRange` if either hour is above 23 or
/// `start_hour > end_hour`.
pub fn generate_slots(
    start_hour: u32,
    end_hour: u32,
    bookings: &[Booking],
) -> Result<Vec<TimeSlot>> {
    validate_hours(start_hour, end_hour)?;

    let mut slots = Vec::with_capacity(((end_hour - start_hour + 1) * 4) as usize);

    for hour in start_hour..=end_hour {
        for minute in (0..60).step_by(SLOT_MINUTES as usize) {
            let start_minutes = hour * 60 + minute;
            let end_minutes = start_minutes + SLOT_MINUTES;
            if end_minutes / 60 > end_hour {
                break;
            }

            let start = WallClock::from_minutes(i64::from(start_minutes));
            let end = WallClock::from_minutes(i64::from(end_minutes));
            slots.push(TimeSlot {
                start,
                end,
                available: !is_occupied(start, end, bookings),
            });
        }
    }

    debug!(
        start_hour,
        end_hour,
        slots = slots.len(),
        occupied = slots.iter().filter(|s| !s.available).count(),
        "generated time-slot grid"
    );

    Ok(slots)
}
