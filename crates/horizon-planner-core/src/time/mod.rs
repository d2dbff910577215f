//! Time-of-day handling for time pickers.
//!
//! - [`parse_time_input`] resolves free-form text to decimal hours
//! - [`format_decimal_hour_label`] renders decimal hours as `H:MMam/pm`
//! - [`generate_time_options`] is the memoised quarter-hour catalogue
//! - [`filter_time_options`] narrows the catalogue as the user types
//!
//! Every catalogue label parses back to its own value:
//!
//! ```
//! use horizon_planner_core::time::{generate_time_options, parse_time_input};
//!
//! for option in generate_time_options() {
//!     assert_eq!(parse_time_input(&option.label), Some(option.value));
//! }
//! ```

mod format;
mod options;
mod parse;

pub use format::{decimal_hour, format_decimal_hour_label, naive_time};
pub use options::{filter_time_options, generate_time_options, TimeOption, TIME_OPTION_COUNT};
pub use parse::{parse_time_input, resolve_hour, split_period, Period};
