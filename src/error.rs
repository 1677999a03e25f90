//! Tracker error types
//!
//! Only failures that abort a whole tracking run live here. Per-note problems
//! (unparseable values, unreadable content, undated notes) are absorbed during
//! the scan and never surface as errors.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that abort a tracking run
#[derive(Error, Debug)]
pub enum TrackerError {
    /// No usable date axis could be resolved
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
