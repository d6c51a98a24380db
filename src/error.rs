use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised while turning configuration or catalog input into domain values.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Unknown selection strategy '{0}', expected one of: aos, max-elevation")]
    UnknownStrategy(String),

    #[error("Minimum duration must be a finite, non-negative number of seconds, got {0}")]
    InvalidMinDuration(f64),

    #[error("Invalid pass of satellite '{name}': {reason}")]
    InvalidPass { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON input: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write plan as CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A resolver picked a remainder that is not a valid range. Signals a broken strategy, never a normal elimination.
    #[error("Resolver produced an invalid range [{start}, {end}] for candidate '{id}'")]
    InvalidTrimmedRange { id: String, start: DateTime<Utc>, end: DateTime<Utc> },
}

pub type Result<T> = std::result::Result<T, Error>;
