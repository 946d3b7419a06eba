//! Merge long runs of free slots into single display ranges.
//!
//! The day timeline would otherwise render dozens of identical empty rows.
//! Occupied slots always pass through one by one and split free runs.

use tracing::trace;

use crate::model::TimeSlot;

/// Replace every maximal run of at least `min_empty_group` consecutive free
/// slots with one free slot spanning `[run.first.start, run.last.end)`.
///
/// Shorter free runs and all occupied slots are returned unchanged, in order.
/// The output uses merged slots of varying width, so feed the raw grid (not
/// this output) to [`crate::find_slot`].
pub fn collapse(slots: &[TimeSlot], min_empty_group: usize) -> Vec<TimeSlot> {
    let mut collapsed = Vec::with_capacity(slots.len());

    for run in slots.chunk_by(|a, b| a.available && b.available) {
        let first = run[0];
        let last = run[run.len() - 1];

        if first.available && run.len() >= min_empty_group {
            trace!(start = %first.start, end = %last.end, slots = run.len(), "merged free run");
            collapsed.push(TimeSlot {
                start: first.start,
                end: last.end,
                available: true,
            });
        } else {
            collapsed.extend_from_slice(run);
        }
    }

    collapsed
}
