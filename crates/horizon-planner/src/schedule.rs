//! Schedule records and their normalisation into calendar events.
//!
//! A schedule holds two kinds of records:
//!
//! - [`Commitment`]: a fixed block repeating on chosen weekdays (a lecture, a
//!   work shift), optionally bounded to a date range such as a semester
//! - [`Deadline`]: a one-off due time, drawn as a short block starting at the
//!   due time
//!
//! [`events_on`] turns the records relevant to a date into [`Event`]s for the
//! layout engine. Records that do not form a valid interval are returned as
//! errors so the caller can report them and carry on with the rest.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use horizon_planner_core::time::decimal_hour;
use horizon_planner_core::{Event, EventId, EventKind, Result, HOURS_PER_DAY};
use serde::{Deserialize, Serialize};

use crate::settings::DeadlineSettings;

/// A block that repeats every week on the given weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// Identifier, unique within the schedule.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Weekdays on which the block occurs.
    pub weekdays: Vec<Weekday>,
    /// Start time.
    pub start: NaiveTime,
    /// End time. `00:00` means midnight at the end of the day.
    pub end: NaiveTime,
    /// First date the block occurs on, if bounded.
    #[serde(default)]
    pub starts_on: Option<NaiveDate>,
    /// Last date the block occurs on, if bounded.
    #[serde(default)]
    pub ends_on: Option<NaiveDate>,
}

impl Commitment {
    /// Create an unbounded weekly commitment.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        weekdays: impl IntoIterator<Item = Weekday>,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            weekdays: weekdays.into_iter().collect(),
            start,
            end,
            starts_on: None,
            ends_on: None,
        }
    }

    /// Bound the recurrence to a date range using builder pattern.
    pub fn with_date_range(mut self, starts_on: NaiveDate, ends_on: NaiveDate) -> Self {
        self.starts_on = Some(starts_on);
        self.ends_on = Some(ends_on);
        self
    }

    /// Whether the commitment occurs on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday())
            && self.starts_on.is_none_or(|first| date >= first)
            && self.ends_on.is_none_or(|last| date <= last)
    }

    /// The commitment as a single day's event.
    pub fn to_event(&self) -> Result<Event> {
        let start = decimal_hour(self.start);
        let end = if self.end == NaiveTime::MIN {
            HOURS_PER_DAY
        } else {
            decimal_hour(self.end)
        };
        Ok(Event::new(&self.id, EventKind::Commitment, start, end)?.with_title(&self.title))
    }
}

/// A one-off due time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    /// Identifier, unique within the schedule.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// When the work is due.
    pub due: NaiveDateTime,
    /// Length of the drawn block; the settings default applies when unset.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl Deadline {
    /// Create a deadline using the default block length.
    pub fn new(id: impl Into<EventId>, title: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due,
            duration_minutes: None,
        }
    }

    /// Set the block length using builder pattern.
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Whether the deadline falls on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.due.date() == date
    }

    /// The deadline as an event starting at the due time, cut off at midnight.
    pub fn to_event(&self, settings: &DeadlineSettings) -> Result<Event> {
        let minutes = self
            .duration_minutes
            .unwrap_or(settings.default_duration_minutes);
        let start = decimal_hour(self.due.time());
        let end = (start + f64::from(minutes) / 60.0).min(HOURS_PER_DAY);
        Ok(Event::new(&self.id, EventKind::Deadline, start, end)?.with_title(&self.title))
    }
}

/// A provider of schedule records.
///
/// The planner reads through this trait so records can come from extracted
/// syllabus tasks, a local file or an in-memory list alike.
pub trait ScheduleSource {
    /// All recurring commitments.
    fn commitments(&self) -> &[Commitment];

    /// All one-off deadlines.
    fn deadlines(&self) -> &[Deadline];
}

/// An in-memory schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySchedule {
    commitments: Vec<Commitment>,
    deadlines: Vec<Deadline>,
}

impl MemorySchedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commitment.
    pub fn add_commitment(&mut self, commitment: Commitment) {
        self.commitments.push(commitment);
    }

    /// Add a commitment using builder pattern.
    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.add_commitment(commitment);
        self
    }

    /// Add a deadline.
    pub fn add_deadline(&mut self, deadline: Deadline) {
        self.deadlines.push(deadline);
    }

    /// Add a deadline using builder pattern.
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.add_deadline(deadline);
        self
    }

    /// Remove every record with the given identifier. Returns `true` if any
    /// record was removed.
    pub fn remove(&mut self, id: &EventId) -> bool {
        let before = self.commitments.len() + self.deadlines.len();
        self.commitments.retain(|c| &c.id != id);
        self.deadlines.retain(|d| &d.id != id);
        before != self.commitments.len() + self.deadlines.len()
    }

    /// Remove all records.
    pub fn clear(&mut self) {
        self.commitments.clear();
        self.deadlines.clear();
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.commitments.len() + self.deadlines.len()
    }

    /// Whether the schedule has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScheduleSource for MemorySchedule {
    fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }

    fn deadlines(&self) -> &[Deadline] {
        &self.deadlines
    }
}

/// Normalise every record occurring on `date` into an event.
///
/// Commitments come first, then deadlines, each in source order.
pub fn events_on<S>(source: &S, date: NaiveDate, settings: &DeadlineSettings) -> Vec<Result<Event>>
where
    S: ScheduleSource + ?Sized,
{
    let commitments = source
        .commitments()
        .iter()
        .filter(|c| c.occurs_on(date))
        .map(Commitment::to_event);
    let deadlines = source
        .deadlines()
        .iter()
        .filter(|d| d.occurs_on(date))
        .map(|d| d.to_event(settings));
    commitments.chain(deadlines).collect()
}
