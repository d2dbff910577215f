//! Decimal hour labels and `chrono` conversions.

use chrono::{NaiveTime, Timelike};

use crate::error::{Error, Result};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Format a decimal hour as a compact 12-hour label such as `9:15am`.
///
/// The value is rounded to the nearest minute and wraps around midnight, so
/// `24.0` renders as `12:00am`.
///
/// # Example
///
/// ```
/// use horizon_planner_core::time::format_decimal_hour_label;
///
/// assert_eq!(format_decimal_hour_label(0.0), "12:00am");
/// assert_eq!(format_decimal_hour_label(13.5), "1:30pm");
/// assert_eq!(format_decimal_hour_label(9.25), "9:15am");
/// ```
pub fn format_decimal_hour_label(value: f64) -> String {
    let minutes = (value * 60.0).round() as i64;
    let minutes = minutes.rem_euclid(MINUTES_PER_DAY);
    let hour = (minutes / 60) as u32;
    let minute = (minutes % 60) as u32;

    let display_hour = if hour == 0 {
        12
    } else if hour > 12 {
        hour - 12
    } else {
        hour
    };
    let am_pm = if hour < 12 { "am" } else { "pm" };

    format!("{display_hour}:{minute:02}{am_pm}")
}

/// Convert a time of day to decimal hours, ignoring seconds.
pub fn decimal_hour(time: NaiveTime) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}

/// Convert decimal hours in `[0, 24)` to a time of day, rounded to the minute.
pub fn naive_time(value: f64) -> Result<NaiveTime> {
    if !value.is_finite() || !(0.0..24.0).contains(&value) {
        return Err(Error::InvalidTime { value });
    }
    let minutes = ((value * 60.0).round() as i64).min(MINUTES_PER_DAY - 1);
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
        .ok_or(Error::InvalidTime { value })
}
