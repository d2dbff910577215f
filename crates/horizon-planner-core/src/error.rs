//! Error types for the planner core.

use crate::event::EventId;

/// Result type alias for planner core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when building events or converting times.
///
/// Unparseable time text is not an error: the parser reports it as `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The end of an interval is not after its start.
    #[error("Invalid interval for event '{id}': end {end} must be after start {start}")]
    InvalidInterval { id: EventId, start: f64, end: f64 },

    /// An hour value lies outside the day or is not a finite number.
    #[error("Hour {hour} for event '{id}' is outside the day")]
    HourOutOfRange { id: EventId, hour: f64 },

    /// A decimal hour cannot be represented as a time of day.
    #[error("{value} is not a valid time of day")]
    InvalidTime { value: f64 },
}

impl Error {
    /// Create an invalid interval error.
    pub fn invalid_interval(id: impl Into<EventId>, start: f64, end: f64) -> Self {
        Self::InvalidInterval {
            id: id.into(),
            start,
            end,
        }
    }

    /// Create an hour out of range error.
    pub fn hour_out_of_range(id: impl Into<EventId>, hour: f64) -> Self {
        Self::HourOutOfRange {
            id: id.into(),
            hour,
        }
    }

    /// The identifier of the offending event, if the error concerns one.
    pub fn event_id(&self) -> Option<&EventId> {
        match self {
            Self::InvalidInterval { id, .. } | Self::HourOutOfRange { id, .. } => Some(id),
            Self::InvalidTime { .. } => None,
        }
    }
}
