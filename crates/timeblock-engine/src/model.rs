//! Bookings, schedule items and time slots.
//!
//! Bookings and their items are owned by the persistence layer; the engine only
//! reads them. Time slots are computed per request and never stored.

use serde::{Deserialize, Serialize};

use crate::conflict::overlaps;
use crate::time::WallClock;

/// What a schedule item asks the family member to do.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// A single to-do.
    #[default]
    Task,
    /// A multi-step household procedure.
    Procedure {
        #[serde(default)]
        steps: Vec<String>,
    },
    /// A reference to a reusable template.
    TemplateRef { template_id: String },
}

/// One entry inside a time block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub completed: bool,
}

impl ScheduleItem {
    /// A plain task item.
    pub fn task(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: ItemKind::Task,
            completed: false,
        }
    }
}

/// An existing time block on a schedule.
///
/// The engine treats it as the half-open interval `[start_time, end_time)`
/// plus the items shown to the user when a new booking collides with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub schedule_id: String,
    pub start_time: WallClock,
    pub end_time: WallClock,
    #[serde(default)]
    pub items: Vec<ScheduleItem>,
}

impl Booking {
    /// A booking with no items attached.
    pub fn new(id: impl Into<String>, start_time: WallClock, end_time: WallClock) -> Self {
        Self {
            id: id.into(),
            schedule_id: String::new(),
            start_time,
            end_time,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<ScheduleItem>) -> Self {
        self.items = items;
        self
    }

    /// Whether this booking overlaps `[start, end)`.
    pub fn overlaps(&self, start: WallClock, end: WallClock) -> bool {
        overlaps(self.start_time, self.end_time, start, end)
    }
}

/// A grid slot, or a merged run of free slots after [`crate::collapse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: WallClock,
    pub end: WallClock,
    pub available: bool,
}

impl TimeSlot {
    pub fn duration_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }

    /// Whether `time` falls inside `[start, end)`.
    pub fn contains(&self, time: WallClock) -> bool {
        self.start <= time && time < self.end
    }
}
