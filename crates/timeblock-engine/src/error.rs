//! Error types for timeblock-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeblockError {
    #[error("Invalid time format: {0:?} (expected HH:MM or HH:MM:SS)")]
    InvalidFormat(String),

    #[error("Invalid hour range: {start}..={end} (hours must be 0-23, start <= end)")]
    InvalidHourRange { start: u32, end: u32 },

    #[error("Invalid minimum empty group size: {0} (must be at least 1)")]
    InvalidGroupSize(usize),

    #[error("Invalid interval: {start}-{end} (end must be after start)")]
    InvalidInterval { start: String, end: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TimeblockError>;
