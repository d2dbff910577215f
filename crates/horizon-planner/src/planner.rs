//! Calendar view orchestration.
//!
//! A [`Planner`] reads schedule records from a [`ScheduleSource`], normalises
//! them into events and builds the day, week and month views with the current
//! settings. Everything is recomputed on each call.
//!
//! Records that cannot be turned into a valid event are skipped. Each skipped
//! occurrence is logged at `warn`, and one warning [`Notification`] counting
//! the distinct skipped records is published per view build.
//!
//! [`Notification`]: crate::notify::Notification

use chrono::{Datelike, NaiveDate};
use horizon_planner_core::logging::targets;
use horizon_planner_core::{Error, Event};

use crate::notify::Notifier;
use crate::schedule::{events_on, ScheduleSource};
use crate::settings::{PlannerSettings, SettingsResult};
use crate::view::{DayLayout, MonthCell, MonthGrid, WeekLayout};

/// Builds calendar views from a schedule source.
#[derive(Debug)]
pub struct Planner<S> {
    source: S,
    settings: PlannerSettings,
    notifier: Notifier,
}

impl<S: ScheduleSource> Planner<S> {
    /// Create a planner with default settings.
    pub fn new(source: S) -> Self {
        Self {
            source,
            settings: PlannerSettings::default(),
            notifier: Notifier::new(),
        }
    }

    /// Create a planner with the given settings, validating them first.
    pub fn with_settings(source: S, settings: PlannerSettings) -> SettingsResult<Self> {
        settings.validate()?;
        Ok(Self {
            source,
            settings,
            notifier: Notifier::new(),
        })
    }

    /// The schedule source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the schedule source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The current settings.
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Replace the settings. Invalid settings are rejected and the current
    /// ones kept.
    pub fn set_settings(&mut self, settings: PlannerSettings) -> SettingsResult<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// The notification bus views report skipped records on.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// The valid events on `date`, skipping and reporting invalid records.
    pub fn events(&self, date: NaiveDate) -> Vec<Event> {
        let mut skipped = Vec::new();
        let events = self.collect(date, &mut skipped);
        self.report(&skipped);
        events
    }

    /// Lay out a single day.
    pub fn day(&self, date: NaiveDate) -> DayLayout {
        let mut skipped = Vec::new();
        let day = self.build_day(date, &mut skipped);
        self.report(&skipped);
        day
    }

    /// Lay out the seven days of the week containing `date`.
    pub fn week(&self, date: NaiveDate) -> WeekLayout {
        let _span = tracing::debug_span!(target: targets::PLANNER, "week", %date).entered();

        let mut skipped = Vec::new();
        let days = WeekLayout::dates(date, self.settings.calendar.first_day_of_week)
            .into_iter()
            .map(|day| self.build_day(day, &mut skipped))
            .collect();
        self.report(&skipped);
        WeekLayout { days }
    }

    /// Build the month grid for `year`/`month` with per-day event counts.
    ///
    /// Returns `None` if `month` is not in `1..=12`.
    pub fn month(&self, year: i32, month: u32) -> Option<MonthGrid> {
        let _span = tracing::debug_span!(target: targets::PLANNER, "month", year, month).entered();

        let dates = MonthGrid::dates(year, month, self.settings.calendar.first_day_of_week)?;
        let mut skipped = Vec::new();
        let cells = dates
            .into_iter()
            .map(|(date, in_month)| MonthCell {
                date,
                in_month,
                event_count: self.collect(date, &mut skipped).len(),
            })
            .collect();
        self.report(&skipped);
        Some(MonthGrid { year, month, cells })
    }

    fn build_day(&self, date: NaiveDate, skipped: &mut Vec<Error>) -> DayLayout {
        let events = self.collect(date, skipped);
        let calendar = &self.settings.calendar;
        DayLayout::build(date, &events, calendar.layout_strategy, &calendar.metrics)
    }

    fn collect(&self, date: NaiveDate, skipped: &mut Vec<Error>) -> Vec<Event> {
        let mut events = Vec::new();
        for result in events_on(&self.source, date, &self.settings.deadlines) {
            match result {
                Ok(event) => events.push(event),
                Err(err) => {
                    tracing::warn!(
                        target: targets::PLANNER,
                        date = %date,
                        weekday = %date.weekday(),
                        error = %err,
                        "skipping invalid schedule record"
                    );
                    skipped.push(err);
                }
            }
        }
        events
    }

    fn report(&self, skipped: &[Error]) {
        // A recurring record fails on every date it occurs on; count it once.
        let mut distinct: Vec<&Error> = Vec::new();
        for err in skipped {
            let repeated = err
                .event_id()
                .is_some_and(|id| distinct.iter().any(|seen| seen.event_id() == Some(id)));
            if !repeated {
                distinct.push(err);
            }
        }

        match distinct.as_slice() {
            [] => {}
            [err] => self
                .notifier
                .warning(format!("Skipped an invalid schedule entry: {err}")),
            records => self.notifier.warning(format!(
                "Skipped {} invalid schedule entries",
                records.len()
            )),
        }
    }
}
