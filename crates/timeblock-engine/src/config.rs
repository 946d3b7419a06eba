//! Operating hours and display grouping for a household's day view.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeblockError};
use crate::grid::validate_hours;

/// Application-level scheduling settings.
///
/// Missing fields fall back to the defaults: the day runs from 05:00 through
/// the 23:00 hour, and four free slots (one hour) are merged in the day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// First hour of the grid (0-23).
    pub start_hour: u32,
    /// Last hour of the grid (0-23), inclusive.
    pub end_hour: u32,
    /// Shortest run of free slots that the day view merges.
    pub min_empty_group: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            start_hour: 5,
            end_hour: 23,
            min_empty_group: 4,
        }
    }
}

impl SchedulerConfig {
    /// Parse a JSON config document and validate it.
    ///
    /// # Errors
    /// Returns `TimeblockError::InvalidConfig` for malformed JSON or unknown
    /// fields, and the [`validate`](Self::validate) errors otherwise.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SchedulerConfig =
            serde_json::from_str(json).map_err(|e| TimeblockError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_hours(self.start_hour, self.end_hour)?;
        if self.min_empty_group == 0 {
            return Err(TimeblockError::InvalidGroupSize(self.min_empty_group));
        }
        Ok(())
    }
}
