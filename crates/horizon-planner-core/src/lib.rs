//! Core algorithms for Horizon Planner.
//!
//! This crate provides the pure building blocks of the planner's calendar and
//! time pickers:
//!
//! - **Events**: validated time-bounded blocks within a day
//! - **Layout Engine**: column packing for overlapping events
//! - **Geometry**: percent/pixel boxes for positioned events
//! - **Time Input**: parsing, formatting and the quarter-hour catalogue
//! - **Signal/Slot System**: typed change notification
//!
//! Everything here is synchronous and free of I/O; results are recomputed
//! from scratch on every call.
//!
//! # Layout Example
//!
//! ```
//! use horizon_planner_core::{layout, Event, EventKind, LayoutMetrics};
//!
//! let events = vec![
//!     Event::new("a", EventKind::Commitment, 9.0, 11.0).unwrap(),
//!     Event::new("b", EventKind::Study, 10.0, 10.5).unwrap(),
//!     Event::new("c", EventKind::Deadline, 10.5, 12.0).unwrap(),
//! ];
//!
//! let metrics = LayoutMetrics::default();
//! for positioned in layout(&events) {
//!     let bounds = metrics.geometry(&positioned);
//!     println!("{} at {}% wide", positioned.id(), bounds.width_percent);
//! }
//! ```
//!
//! # Time Input Example
//!
//! ```
//! use horizon_planner_core::time::{format_decimal_hour_label, parse_time_input};
//!
//! let value = parse_time_input("230").unwrap();
//! assert_eq!(format_decimal_hour_label(value), "2:30pm");
//! ```

mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod signal;
pub mod time;

pub use error::{Error, Result};
pub use event::{Event, EventId, EventKind, PositionedEvent, HOURS_PER_DAY};
pub use geometry::{EventGeometry, LayoutMetrics};
pub use layout::{layout, layout_with, LayoutStrategy};
pub use signal::{ConnectionId, Signal};
