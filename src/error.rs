//! Error types for room fetching, map loading, hour picks and checkout

use thiserror::Error;

/// Failure of the room fetch collaborator
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("room list request returned status {0}")]
    Status(u16),

    #[error("room list payload could not be decoded: {0}")]
    Malformed(String),
}

/// Failure to bring up the map widget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map app key is missing")]
    MissingAppKey,

    #[error("map script load error: {0}")]
    LoadFailed(String),
}

/// Rejected hour or date pick; the selection is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("hour {0} is outside 0..=23")]
    OutOfRange(u8),

    #[error("hour {0} is not bookable")]
    HourDisabled(u8),

    #[error("range {start}..={end} contains blocked hour {blocked}")]
    ContainsBlockedHour { start: u8, end: u8, blocked: u8 },

    #[error("date is in the past")]
    PastDate,
}

/// Reservation could not proceed to payment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("no hours selected")]
    NoHoursSelected,

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
