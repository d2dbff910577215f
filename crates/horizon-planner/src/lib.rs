//! Horizon Planner - calendar views and time pickers for a study planner.
//!
//! This is the main umbrella crate that re-exports the core algorithms and
//! adds the planner-facing pieces on top:
//!
//! - **Settings**: TOML/JSON configuration with validation
//! - **Schedule**: recurring commitments and deadlines normalised into events
//! - **Views**: day, week and month view models
//! - **Planner**: builds views from a schedule source
//! - **Time Input**: free-text time picker state
//! - **Notifications**: a typed notification bus
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime, Weekday};
//! use horizon_planner::prelude::*;
//!
//! let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
//! let monday = [Weekday::Mon];
//! let schedule = MemorySchedule::new()
//!     .with_commitment(Commitment::new("cs101", "Lecture", monday, time(9, 0), time(11, 0)))
//!     .with_commitment(Commitment::new("tutor", "Tutoring", monday, time(10, 0), time(10, 30)));
//!
//! let planner = Planner::new(schedule);
//! let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! for block in planner.day(date).blocks {
//!     println!(
//!         "{} in column {} of {}, {}px from the top",
//!         block.id(),
//!         block.positioned.column,
//!         block.positioned.total_columns,
//!         block.geometry.top_px,
//!     );
//! }
//! ```

pub use horizon_planner_core::*;

pub mod notify;
pub mod planner;
pub mod prelude;
pub mod schedule;
pub mod settings;
pub mod time_input;
pub mod view;

pub use notify::{Notification, NotificationLevel, Notifier};
pub use planner::Planner;
pub use schedule::{Commitment, Deadline, MemorySchedule, ScheduleSource};
pub use settings::{PlannerSettings, SettingsError, SettingsResult};
pub use time_input::{TimeInput, TimeRangeInput};
pub use view::{DayLayout, EventBlock, MonthCell, MonthGrid, WeekLayout};
