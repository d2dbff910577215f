//! Prelude module for Horizon Planner.
//!
//! ```ignore
//! use horizon_planner::prelude::*;
//! ```

// ============================================================================
// Events and Layout
// ============================================================================

pub use crate::{
    layout, layout_with, Event, EventGeometry, EventId, EventKind, LayoutMetrics, LayoutStrategy,
    PositionedEvent,
};

// ============================================================================
// Time Input
// ============================================================================

pub use crate::time::{format_decimal_hour_label, parse_time_input, TimeOption};
pub use crate::time_input::{TimeInput, TimeRangeInput};

// ============================================================================
// Schedule and Views
// ============================================================================

pub use crate::planner::Planner;
pub use crate::schedule::{Commitment, Deadline, MemorySchedule, ScheduleSource};
pub use crate::view::{DayLayout, EventBlock, MonthGrid, WeekLayout};

// ============================================================================
// Settings, Signals and Notifications
// ============================================================================

pub use crate::notify::{Notification, NotificationLevel, Notifier};
pub use crate::settings::PlannerSettings;
pub use crate::{ConnectionId, Signal};
