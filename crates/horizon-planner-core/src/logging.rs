//! Logging facilities for Horizon Planner.
//!
//! Horizon Planner uses the `tracing` crate for instrumentation. Install a
//! subscriber in the host application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Unparseable time text is an expected, transient state while the user is
//! typing, so the time parser never logs.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=horizon_planner_core::layout=trace`.
pub mod targets {
    /// Event layout engine target.
    pub const LAYOUT: &str = "horizon_planner_core::layout";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_planner_core::signal";
    /// Planner facade target.
    pub const PLANNER: &str = "horizon_planner";
    /// Settings load/save target.
    pub const SETTINGS: &str = "horizon_planner::settings";
    /// Time picker state target.
    pub const TIME_INPUT: &str = "horizon_planner::time_input";
}
