//! # timeblock-engine
//!
//! Time-block scheduling and conflict resolution for family day planning.
//!
//! A day is partitioned into fixed 15-minute slots between an opening and a
//! closing hour. Each slot is stamped free or occupied against the bookings
//! already on the schedule. The engine is stateless: every call takes its
//! inputs (hours, bookings, durations) and returns a fresh result.
//!
//! ## Modules
//!
//! - [`time`] -- `HH:MM` wall-clock parsing, formatting and slot rounding
//! - [`model`] -- bookings, schedule items and time slots
//! - [`conflict`] -- half-open interval overlap and booking conflict checks
//! - [`grid`] -- generate the 15-minute slot grid for a day
//! - [`collapse`] -- merge long runs of free slots for display
//! - [`placement`] -- find the earliest free window for a given duration
//! - [`planner`] -- grid + collapse / grid + placement in one call
//! - [`config`] -- operating hours and display grouping
//! - [`error`] -- Error types

pub mod collapse;
pub mod config;
pub mod conflict;
pub mod error;
pub mod grid;
pub mod model;
pub mod placement;
pub mod planner;
pub mod time;

pub use collapse::collapse;
pub use config::SchedulerConfig;
pub use conflict::{check_conflicts, overlaps, ConflictResult};
pub use error::TimeblockError;
pub use grid::generate_slots;
pub use model::{Booking, ItemKind, ScheduleItem, TimeSlot};
pub use placement::find_slot;
pub use time::WallClock;
