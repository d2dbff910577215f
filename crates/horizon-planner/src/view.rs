//! Calendar view models.
//!
//! These are plain data built from laid-out events; a renderer draws them
//! without further computation.
//!
//! - [`DayLayout`]: one day column, each event with its column and pixel box
//! - [`WeekLayout`]: seven day columns starting at the configured weekday
//! - [`MonthGrid`]: a 6x7 grid of dates with per-day event counts

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use horizon_planner_core::{
    layout_with, Event, EventGeometry, EventId, LayoutMetrics, LayoutStrategy, PositionedEvent,
};
use serde::Serialize;

/// Number of days in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of week rows in a month grid.
pub const MONTH_GRID_ROWS: usize = 6;

/// A positioned event and where to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBlock {
    /// The event with its column and column count.
    pub positioned: PositionedEvent,
    /// The box to draw within the day column.
    pub geometry: EventGeometry,
}

impl EventBlock {
    /// The event identifier.
    pub fn id(&self) -> &EventId {
        self.positioned.id()
    }
}

/// A single laid-out day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    /// The day laid out.
    pub date: NaiveDate,
    /// Blocks in placement order (start ascending, longer first on ties).
    pub blocks: Vec<EventBlock>,
}

impl DayLayout {
    /// Lay out `events` for `date`.
    pub fn build(
        date: NaiveDate,
        events: &[Event],
        strategy: LayoutStrategy,
        metrics: &LayoutMetrics,
    ) -> Self {
        let blocks = layout_with(events, strategy)
            .into_iter()
            .map(|positioned| EventBlock {
                geometry: metrics.geometry(&positioned),
                positioned,
            })
            .collect();
        Self { date, blocks }
    }

    /// Look up a block by event identifier.
    pub fn block(&self, id: &EventId) -> Option<&EventBlock> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the day has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Seven consecutive laid-out days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout {
    /// The seven days in display order.
    pub days: Vec<DayLayout>,
}

impl WeekLayout {
    /// The first date of the week containing `anchor`.
    pub fn week_start(anchor: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
        anchor - Duration::days(i64::from(weekday_index(anchor.weekday(), first_day_of_week)))
    }

    /// The seven dates of the week containing `anchor`.
    pub fn dates(anchor: NaiveDate, first_day_of_week: Weekday) -> Vec<NaiveDate> {
        let start = Self::week_start(anchor, first_day_of_week);
        (0..DAYS_PER_WEEK as i64)
            .map(|offset| start + Duration::days(offset))
            .collect()
    }

    /// The day for `date`, if it falls in this week.
    pub fn day(&self, date: NaiveDate) -> Option<&DayLayout> {
        self.days.iter().find(|d| d.date == date)
    }

    /// The date of the first column.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    /// The date shown in the cell.
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month rather than padding.
    pub in_month: bool,
    /// Number of valid events on the date.
    pub event_count: usize,
}

/// A month as 6 rows of 7 dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Displayed year.
    pub year: i32,
    /// Displayed month, 1-12.
    pub month: u32,
    /// Row-major cells, always `6 * 7` of them.
    pub cells: Vec<MonthCell>,
}

impl MonthGrid {
    /// Dates shown for a month, each flagged with whether it is in the month.
    ///
    /// Returns `None` if `year`/`month` do not name a month.
    pub fn dates(
        year: i32,
        month: u32,
        first_day_of_week: Weekday,
    ) -> Option<Vec<(NaiveDate, bool)>> {
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset = weekday_index(first_of_month.weekday(), first_day_of_week);
        let start = first_of_month - Duration::days(i64::from(offset));

        let days = (0..(MONTH_GRID_ROWS * DAYS_PER_WEEK) as i64)
            .map(|i| {
                let date = start + Duration::days(i);
                (date, date.year() == year && date.month() == month)
            })
            .collect();
        Some(days)
    }

    /// Cells of row `row` (0-5).
    pub fn row(&self, row: usize) -> &[MonthCell] {
        let start = (row * DAYS_PER_WEEK).min(self.cells.len());
        let end = (start + DAYS_PER_WEEK).min(self.cells.len());
        &self.cells[start..end]
    }

    /// The cell for `date`, if shown.
    pub fn cell(&self, date: NaiveDate) -> Option<&MonthCell> {
        self.cells.iter().find(|c| c.date == date)
    }
}

/// Column (0-6) of `day` in a week starting at `first_day_of_week`.
fn weekday_index(day: Weekday, first_day_of_week: Weekday) -> u32 {
    let first = first_day_of_week.num_days_from_sunday();
    let this = day.num_days_from_sunday();
    (this + 7 - first) % 7
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_planner_core::EventKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index(Weekday::Sun, Weekday::Sun), 0);
        assert_eq!(weekday_index(Weekday::Sat, Weekday::Sun), 6);
        assert_eq!(weekday_index(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(weekday_index(Weekday::Wed, Weekday::Mon), 2);
    }

    #[test]
    fn test_week_start() {
        // 2026-10-21 is a Wednesday.
        let anchor = date(2026, 10, 21);
        assert_eq!(WeekLayout::week_start(anchor, Weekday::Sun), date(2026, 10, 18));
        assert_eq!(WeekLayout::week_start(anchor, Weekday::Mon), date(2026, 10, 19));
        assert_eq!(WeekLayout::week_start(date(2026, 10, 18), Weekday::Mon), date(2026, 10, 12));
    }

    #[test]
    fn test_week_dates_cross_month() {
        let dates = WeekLayout::dates(date(2026, 11, 1), Weekday::Mon);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2026, 10, 26));
        assert_eq!(dates[6], date(2026, 11, 1));
    }

    #[test]
    fn test_month_dates() {
        // October 2026 starts on a Thursday.
        let days = MonthGrid::dates(2026, 10, Weekday::Sun).unwrap();
        assert_eq!(days.len(), 42);
        assert_eq!(days[0], (date(2026, 9, 27), false));
        assert_eq!(days[4], (date(2026, 10, 1), true));
        assert_eq!(days.iter().filter(|(_, in_month)| *in_month).count(), 31);

        let days = MonthGrid::dates(2026, 10, Weekday::Thu).unwrap();
        assert_eq!(days[0], (date(2026, 10, 1), true));
    }

    #[test]
    fn test_month_dates_invalid_month() {
        assert!(MonthGrid::dates(2026, 13, Weekday::Sun).is_none());
        assert!(MonthGrid::dates(2026, 0, Weekday::Sun).is_none());
    }

    #[test]
    fn test_day_layout() {
        let events = vec![
            Event::new("a", EventKind::Commitment, 9.0, 11.0).unwrap(),
            Event::new("b", EventKind::Study, 10.0, 10.5).unwrap(),
        ];
        let day = DayLayout::build(
            date(2026, 10, 19),
            &events,
            LayoutStrategy::default(),
            &LayoutMetrics::default(),
        );

        assert_eq!(day.len(), 2);
        let b = day.block(&EventId::new("b")).unwrap();
        assert_eq!(b.positioned.column, 1);
        assert_eq!(b.geometry.left_percent, 50.0);
        assert_eq!(b.geometry.top_px, 600.0);
        assert!(day.block(&EventId::new("missing")).is_none());
    }

    #[test]
    fn test_month_grid_rows() {
        let cells = MonthGrid::dates(2026, 2, Weekday::Sun)
            .unwrap()
            .into_iter()
            .map(|(date, in_month)| MonthCell {
                date,
                in_month,
                event_count: 0,
            })
            .collect();
        let grid = MonthGrid {
            year: 2026,
            month: 2,
            cells,
        };

        assert_eq!(grid.row(0).len(), 7);
        assert_eq!(grid.row(5).len(), 7);
        assert!(grid.row(6).is_empty());
        assert!(grid.cell(date(2026, 2, 28)).unwrap().in_month);
    }
}
