//! Free-form time text parsing.
//!
//! Accepts what people actually type into a time picker: `2`, `9a`, `230pm`,
//! `14:00`, `7:45 am`. A bare hour without a period uses a study-day
//! heuristic: 1 through 7 mean the afternoon, 8 through 12 mean the morning
//! (a bare `12` is noon).

use std::sync::LazyLock;

use regex::Regex;

/// Morning or afternoon marker typed after a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// `a` or `am`.
    Am,
    /// `p` or `pm`.
    Pm,
}

struct Patterns {
    period: Regex,
    colon: Regex,
    compact: Regex,
    bare: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    // Trailing a/am/p/pm, optionally separated by whitespace.
    period: Regex::new(r"^(.*?)\s*(am?|pm?)$").expect("valid period regex"),
    // 2:30, 14:00
    colon: Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid colon regex"),
    // 230, 1430
    compact: Regex::new(r"^([0-9]{1,2})([0-9]{2})$").expect("valid compact regex"),
    // 2, 14
    bare: Regex::new(r"^([0-9]{1,2})$").expect("valid bare regex"),
});

/// Parse free-form time text into decimal hours.
///
/// Returns `None` for anything that is not a recognisable time of day;
/// callers keep their previous value in that case.
///
/// # Example
///
/// ```
/// use horizon_planner_core::time::parse_time_input;
///
/// assert_eq!(parse_time_input("2"), Some(14.0));
/// assert_eq!(parse_time_input("9"), Some(9.0));
/// assert_eq!(parse_time_input("230pm"), Some(14.5));
/// assert_eq!(parse_time_input("14:00"), Some(14.0));
/// assert_eq!(parse_time_input("noon"), None);
/// ```
pub fn parse_time_input(input: &str) -> Option<f64> {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    let (numeric, period) = split_period(&text);
    let patterns = &*PATTERNS;

    [&patterns.colon, &patterns.compact, &patterns.bare]
        .into_iter()
        .find_map(|shape| {
            let caps = shape.captures(numeric)?;
            let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
            let minute: u32 = match caps.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0,
            };
            to_decimal(resolve_hour(hour, period), minute)
        })
}

/// Split a trailing period marker off lowercased, trimmed text.
pub fn split_period(text: &str) -> (&str, Option<Period>) {
    let Some(caps) = PATTERNS.period.captures(text) else {
        return (text, None);
    };
    let (Some(numeric), Some(marker)) = (caps.get(1), caps.get(2)) else {
        return (text, None);
    };
    let period = if marker.as_str().starts_with('a') {
        Period::Am
    } else {
        Period::Pm
    };
    (numeric.as_str(), Some(period))
}

/// Resolve a typed hour to the 24-hour clock.
///
/// Hours above 12 are already unambiguous. With an explicit period the usual
/// noon/midnight rules apply; without one, 1-7 resolve to PM and everything
/// else stays as typed.
pub fn resolve_hour(hour: u32, period: Option<Period>) -> u32 {
    match period {
        Some(Period::Pm) if hour < 12 => hour + 12,
        Some(Period::Am) if hour == 12 => 0,
        Some(_) => hour,
        None if hour > 12 => hour,
        None if (1..=7).contains(&hour) => hour + 12,
        None => hour,
    }
}

fn to_decimal(hour: u32, minute: u32) -> Option<f64> {
    (hour < 24 && minute < 60).then(|| f64::from(hour) + f64::from(minute) / 60.0)
}
