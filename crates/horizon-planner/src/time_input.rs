//! Time picker state.
//!
//! [`TimeInput`] is the model behind a free-text time field with a dropdown
//! of quarter-hour suggestions. The user types, the dropdown narrows, and on
//! blur the text is parsed. A successful parse replaces the text with the
//! canonical label (`230` becomes `2:30pm`); a failed one restores the label
//! of the last committed value.
//!
//! [`TimeRangeInput`] pairs a start and an end field. Committing the start
//! restricts the end field's suggestions to later times.
//!
//! # Example
//!
//! ```
//! use horizon_planner::time_input::TimeInput;
//!
//! let mut input = TimeInput::new();
//! input.set_text("230");
//! assert_eq!(input.commit(), Some(14.5));
//! assert_eq!(input.text(), "2:30pm");
//!
//! input.set_text("later");
//! assert_eq!(input.commit(), Some(14.5));
//! assert_eq!(input.text(), "2:30pm");
//! ```

use chrono::NaiveTime;
use horizon_planner_core::logging::targets;
use horizon_planner_core::time::{
    decimal_hour, filter_time_options, format_decimal_hour_label, naive_time, parse_time_input,
    TimeOption,
};
use horizon_planner_core::{Error, Event, EventId, EventKind, Result, Signal};

/// A free-text time field with filtered suggestions.
///
/// # Signals
///
/// - `value_changed(f64)`: emitted when the committed value changes
#[derive(Debug, Default)]
pub struct TimeInput {
    text: String,
    committed: Option<f64>,
    filter_after: Option<f64>,

    /// Signal emitted when the committed value changes.
    pub value_changed: Signal<f64>,
}

impl TimeInput {
    /// Create an empty time input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value using builder pattern.
    pub fn with_value(mut self, value: f64) -> Result<Self> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Set the initial time using builder pattern.
    pub fn with_time(self, time: NaiveTime) -> Result<Self> {
        self.with_value(decimal_hour(time))
    }

    /// Only suggest times strictly after `after`, using builder pattern.
    pub fn with_filter_after(mut self, after: f64) -> Self {
        self.filter_after = Some(after);
        self
    }

    /// The text currently in the field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The committed value in decimal hours.
    pub fn value(&self) -> Option<f64> {
        self.committed
    }

    /// The committed value as a time of day.
    pub fn time(&self) -> Option<NaiveTime> {
        self.committed.and_then(|value| naive_time(value).ok())
    }

    /// Set the committed value directly.
    ///
    /// Fails with [`Error::InvalidTime`] for values outside `[0, 24)`.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        naive_time(value)?;
        self.apply(value);
        Ok(())
    }

    /// Set the committed value without emitting `value_changed`, as when
    /// loading a stored time into the field.
    pub fn load_value(&mut self, value: f64) -> Result<()> {
        naive_time(value)?;
        let was_blocked = self.value_changed.is_blocked();
        self.value_changed.set_blocked(true);
        self.apply(value);
        self.value_changed.set_blocked(was_blocked);
        Ok(())
    }

    /// The lower bound applied to suggestions.
    pub fn filter_after(&self) -> Option<f64> {
        self.filter_after
    }

    /// Set or clear the lower bound applied to suggestions.
    pub fn set_filter_after(&mut self, after: Option<f64>) {
        self.filter_after = after;
    }

    /// Replace the field text, as on a keystroke. Nothing is parsed yet.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Suggestions matching the current text.
    pub fn options(&self) -> Vec<&'static TimeOption> {
        filter_time_options(&self.text, self.filter_after)
    }

    /// Parse the field text, as on blur.
    ///
    /// On success the value is committed and the text replaced by its label.
    /// Otherwise the previous value is kept and its label restored (or the
    /// field cleared if nothing was committed yet). Returns the committed
    /// value either way.
    pub fn commit(&mut self) -> Option<f64> {
        match parse_time_input(&self.text) {
            Some(value) => self.apply(value),
            None => {
                self.text = self
                    .committed
                    .map(format_decimal_hour_label)
                    .unwrap_or_default();
            }
        }
        self.committed
    }

    /// Commit a suggestion picked from the dropdown.
    pub fn select(&mut self, option: &TimeOption) {
        self.apply(option.value);
    }

    /// Clear both the text and the committed value.
    pub fn clear(&mut self) {
        self.text.clear();
        self.committed = None;
    }

    fn apply(&mut self, value: f64) {
        self.text = format_decimal_hour_label(value);
        if self.committed == Some(value) {
            return;
        }
        self.committed = Some(value);
        tracing::debug!(target: targets::TIME_INPUT, value, label = %self.text, "time committed");
        self.value_changed.emit(value);
    }
}

/// A start/end pair of time inputs for one event.
#[derive(Debug)]
pub struct TimeRangeInput {
    id: EventId,
    start: TimeInput,
    end: TimeInput,
}

impl TimeRangeInput {
    /// Create an empty range for the event `id`.
    pub fn new(id: impl Into<EventId>) -> Self {
        Self {
            id: id.into(),
            start: TimeInput::new(),
            end: TimeInput::new(),
        }
    }

    /// Prefill both ends using builder pattern.
    pub fn with_range(mut self, start: f64, end: f64) -> Result<Self> {
        self.set_range(start, end)?;
        Ok(self)
    }

    /// Load a stored range into both fields without emitting
    /// `value_changed`. Nothing changes if either value is not a time of day.
    pub fn set_range(&mut self, start: f64, end: f64) -> Result<()> {
        naive_time(start)?;
        naive_time(end)?;
        self.start.load_value(start)?;
        self.end.load_value(end)?;
        self.end.set_filter_after(Some(start));
        Ok(())
    }

    /// The event identifier.
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// The start field.
    pub fn start(&self) -> &TimeInput {
        &self.start
    }

    /// The end field.
    pub fn end(&self) -> &TimeInput {
        &self.end
    }

    /// Replace the start field text.
    pub fn set_start_text(&mut self, text: impl Into<String>) {
        self.start.set_text(text);
    }

    /// Replace the end field text.
    pub fn set_end_text(&mut self, text: impl Into<String>) {
        self.end.set_text(text);
    }

    /// Commit the start field and narrow the end field's suggestions.
    pub fn commit_start(&mut self) -> Option<f64> {
        let value = self.start.commit();
        self.end.set_filter_after(value);
        value
    }

    /// Commit a start suggestion and narrow the end field's suggestions.
    pub fn select_start(&mut self, option: &TimeOption) {
        self.start.select(option);
        self.end.set_filter_after(self.start.value());
    }

    /// Commit the end field.
    pub fn commit_end(&mut self) -> Option<f64> {
        self.end.commit()
    }

    /// Commit an end suggestion.
    pub fn select_end(&mut self, option: &TimeOption) {
        self.end.select(option);
    }

    /// The committed range, `None` while either end is unset.
    ///
    /// Fails with [`Error::InvalidInterval`] if the end is not after the start.
    pub fn range(&self) -> Result<Option<(f64, f64)>> {
        let (Some(start), Some(end)) = (self.start.value(), self.end.value()) else {
            return Ok(None);
        };
        if end <= start {
            return Err(Error::invalid_interval(&self.id, start, end));
        }
        Ok(Some((start, end)))
    }

    /// Build an event from the committed range.
    pub fn to_event(&self, kind: EventKind) -> Result<Option<Event>> {
        self.range()?
            .map(|(start, end)| Event::new(&self.id, kind, start, end))
            .transpose()
    }
}

static_assertions::assert_impl_all!(TimeInput: Send, Sync);
