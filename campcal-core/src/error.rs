//! Error types for campcal.

use thiserror::Error;

/// Errors that can occur while exporting a schedule.
#[derive(Error, Debug)]
pub enum CampCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not parse schedule: {0}")]
    ScheduleParse(#[from] serde_json::Error),

    #[error("Invalid date/time '{date} {time}': expected YYYY-MM-DD and HH:MM")]
    InvalidDateTime { date: String, time: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for campcal operations.
pub type CampCalResult<T> = Result<T, CampCalError>;
