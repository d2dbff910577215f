//! Calendar events and their positioned form.
//!
//! An [`Event`] is a time-bounded block within a single day, expressed in
//! decimal hours (`9.5` is 9:30 AM). Construction validates the interval, so
//! every `Event` in circulation satisfies `0 <= start < end <= 24`.
//!
//! # Example
//!
//! ```
//! use horizon_planner_core::{Event, EventKind};
//!
//! let lecture = Event::new("cs101", EventKind::Commitment, 9.0, 10.5).unwrap();
//! assert_eq!(lecture.duration(), 1.5);
//!
//! // Inverted intervals are rejected up front.
//! assert!(Event::new("bad", EventKind::Study, 11.0, 10.0).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of hours in a day; the exclusive upper bound of a start hour.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Opaque identifier of an event, unique within the day being laid out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&EventId> for EventId {
    fn from(id: &EventId) -> Self {
        id.clone()
    }
}

/// Category of an event. Only affects rendering style, never layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A fixed recurring commitment (class, work shift).
    #[default]
    Commitment,
    /// A one-off deadline.
    Deadline,
    /// A planned study session.
    Study,
}

/// A time-bounded event within a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    id: EventId,
    kind: EventKind,
    title: Option<String>,
    start_hour: f64,
    end_hour: f64,
}

impl Event {
    /// Create an event spanning `[start_hour, end_hour)`.
    ///
    /// Fails with [`Error::HourOutOfRange`] when either bound is not finite or
    /// lies outside the day, and with [`Error::InvalidInterval`] when
    /// `end_hour <= start_hour`.
    pub fn new(
        id: impl Into<EventId>,
        kind: EventKind,
        start_hour: f64,
        end_hour: f64,
    ) -> Result<Self> {
        let id = id.into();
        if !start_hour.is_finite() || !(0.0..HOURS_PER_DAY).contains(&start_hour) {
            return Err(Error::hour_out_of_range(id, start_hour));
        }
        if !end_hour.is_finite() || end_hour > HOURS_PER_DAY {
            return Err(Error::hour_out_of_range(id, end_hour));
        }
        if end_hour <= start_hour {
            return Err(Error::invalid_interval(id, start_hour, end_hour));
        }
        Ok(Self {
            id,
            kind,
            title: None,
            start_hour,
            end_hour,
        })
    }

    /// Set the display title using builder pattern.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The event identifier.
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// The event category.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The display title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Start of the event in decimal hours.
    pub fn start_hour(&self) -> f64 {
        self.start_hour
    }

    /// End of the event in decimal hours.
    pub fn end_hour(&self) -> f64 {
        self.end_hour
    }

    /// Length of the event in hours. Always positive.
    pub fn duration(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// Strict interval overlap: touching intervals do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }
}

/// An event with its assigned horizontal slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent {
    /// The event being positioned.
    pub event: Event,
    /// Zero-based column assigned to this event.
    pub column: usize,
    /// Number of columns the event's time window is divided into.
    pub total_columns: usize,
}

impl PositionedEvent {
    pub(crate) fn new(event: Event, column: usize, total_columns: usize) -> Self {
        Self {
            event,
            column,
            total_columns,
        }
    }

    /// Shorthand for the event identifier.
    pub fn id(&self) -> &EventId {
        self.event.id()
    }

    /// Whether this positioned event overlaps another.
    pub fn overlaps(&self, other: &PositionedEvent) -> bool {
        self.event.overlaps(&other.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = Event::new("a", EventKind::Study, 9.5, 11.0)
            .unwrap()
            .with_title("Revision");
        assert_eq!(event.id().as_str(), "a");
        assert_eq!(event.kind(), EventKind::Study);
        assert_eq!(event.title(), Some("Revision"));
        assert_eq!(event.duration(), 1.5);
    }

    #[test]
    fn test_event_full_day() {
        let event = Event::new("day", EventKind::Commitment, 0.0, 24.0).unwrap();
        assert_eq!(event.duration(), 24.0);
    }

    #[test]
    fn test_event_rejects_inverted_interval() {
        let err = Event::new("x", EventKind::Study, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInterval { .. }));

        let err = Event::new("x", EventKind::Study, 10.0, 9.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInterval { .. }));
    }

    #[test]
    fn test_event_rejects_out_of_day_hours() {
        assert!(matches!(
            Event::new("x", EventKind::Study, -1.0, 2.0),
            Err(Error::HourOutOfRange { .. })
        ));
        assert!(matches!(
            Event::new("x", EventKind::Study, 24.0, 25.0),
            Err(Error::HourOutOfRange { .. })
        ));
        assert!(matches!(
            Event::new("x", EventKind::Study, 23.0, 24.5),
            Err(Error::HourOutOfRange { .. })
        ));
        assert!(matches!(
            Event::new("x", EventKind::Study, f64::NAN, 2.0),
            Err(Error::HourOutOfRange { .. })
        ));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Event::new("a", EventKind::Study, 9.0, 10.0).unwrap();
        let b = Event::new("b", EventKind::Study, 10.0, 11.0).unwrap();
        let c = Event::new("c", EventKind::Study, 9.5, 10.5).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }
}
