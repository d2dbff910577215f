//! The quarter-hour option catalogue offered by time pickers.

use std::sync::LazyLock;

use serde::Serialize;

use super::format::format_decimal_hour_label;
use super::parse::parse_time_input;

/// Number of entries in the catalogue: one per 15 minutes.
pub const TIME_OPTION_COUNT: usize = 96;

/// Tolerance used when matching a parsed value against catalogue values.
const VALUE_TOLERANCE: f64 = 0.01;

/// A selectable time of day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeOption {
    /// Display label, e.g. `2:30pm`.
    pub label: String,
    /// Decimal hour in `[0, 24)`.
    pub value: f64,
}

static CATALOGUE: LazyLock<Vec<TimeOption>> = LazyLock::new(|| {
    (0..TIME_OPTION_COUNT)
        .map(|slot| {
            let value = slot as f64 * 0.25;
            TimeOption {
                label: format_decimal_hour_label(value),
                value,
            }
        })
        .collect()
});

/// The 96-entry quarter-hour catalogue, built once per process.
pub fn generate_time_options() -> &'static [TimeOption] {
    &CATALOGUE
}

/// Filter the catalogue against what the user has typed so far.
///
/// An option is offered when it lies strictly after `filter_after` (if given)
/// and either the input is empty, its label contains the input, its value
/// equals the parsed input, or the input is a bare hour matching the option's
/// hour on either half of the clock (`7` offers both 7am and 7pm).
///
/// # Example
///
/// ```
/// use horizon_planner_core::time::filter_time_options;
///
/// let labels: Vec<_> = filter_time_options("7", None)
///     .iter()
///     .map(|o| o.label.as_str())
///     .collect();
/// assert!(labels.contains(&"7:00am"));
/// assert!(labels.contains(&"7:00pm"));
///
/// // An end-time picker never offers the start time or anything before it.
/// assert!(filter_time_options("", Some(9.0)).iter().all(|o| o.value > 9.0));
/// ```
pub fn filter_time_options(input: &str, filter_after: Option<f64>) -> Vec<&'static TimeOption> {
    let query = input.trim().to_lowercase();
    let parsed = parse_time_input(&query);
    let bare_hour = bare_hour(&query);

    generate_time_options()
        .iter()
        .filter(|option| filter_after.is_none_or(|after| option.value > after))
        .filter(|option| {
            query.is_empty()
                || option.label.contains(&query)
                || parsed.is_some_and(|value| (option.value - value).abs() < VALUE_TOLERANCE)
                || bare_hour.is_some_and(|typed| {
                    let hour = option.value.floor() as u32;
                    hour % 12 == typed % 12 || hour == typed % 24
                })
        })
        .collect()
}

/// A one or two digit number typed on its own.
fn bare_hour(query: &str) -> Option<u32> {
    if (1..=2).contains(&query.len()) && query.bytes().all(|b| b.is_ascii_digit()) {
        query.parse().ok()
    } else {
        None
    }
}
