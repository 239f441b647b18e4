//! Error types for hours-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    #[error("Close hour before or equal open hour: {0}")]
    CloseHourBeforeOrEqualOpen(String),

    #[error("Timestamp out of range: {0}")]
    OutOfRangeTimestamp(String),

    #[error("Missing open-close hours pair: {0}")]
    MissingOpenCloseHoursPair(String),

    #[error("Hours overlap: {0}")]
    HoursOverlap(String),

    #[error("Wrong day of week: {0}")]
    WrongDayOfWeek(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl HoursError {
    /// Whether the error was caused by caller-supplied hours data.
    ///
    /// Everything except [`HoursError::InvalidSettings`] is an input
    /// validation failure that a request boundary reports back to the client.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, HoursError::InvalidSettings(_))
    }
}

pub type Result<T> = std::result::Result<T, HoursError>;
