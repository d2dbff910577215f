//! Box geometry for positioned events.
//!
//! Horizontal placement is expressed in percent of the day column's width so
//! the same layout serves the daily view and the narrower weekly columns.
//! Vertical placement is in pixels from midnight.

use serde::{Deserialize, Serialize};

use crate::event::PositionedEvent;

/// Pixel metrics of a day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Height of one hour row.
    pub row_height_px: f32,
    /// Visual gap left below each event box.
    pub gutter_px: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height_px: 60.0,
            gutter_px: 2.0,
        }
    }
}

impl LayoutMetrics {
    /// Create metrics with the given row height and gutter.
    pub fn new(row_height_px: f32, gutter_px: f32) -> Self {
        Self {
            row_height_px,
            gutter_px,
        }
    }

    /// Total height of a 24-hour column.
    pub fn day_height(&self) -> f32 {
        24.0 * self.row_height_px
    }

    /// Compute the box for a positioned event.
    pub fn geometry(&self, positioned: &PositionedEvent) -> EventGeometry {
        let total = positioned.total_columns.max(1) as f32;
        let width_percent = 100.0 / total;
        let event = &positioned.event;

        EventGeometry {
            left_percent: positioned.column as f32 * width_percent,
            width_percent,
            top_px: event.start_hour() as f32 * self.row_height_px,
            height_px: (event.duration() as f32 * self.row_height_px - self.gutter_px).max(0.0),
        }
    }
}

/// Where an event box is drawn inside its day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventGeometry {
    /// Horizontal offset in percent of the column width.
    pub left_percent: f32,
    /// Width in percent of the column width.
    pub width_percent: f32,
    /// Offset from the top of the column (midnight).
    pub top_px: f32,
    /// Box height, gutter already removed.
    pub height_px: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventKind};
    use crate::layout::layout;

    #[test]
    fn test_geometry_side_by_side() {
        let positioned = layout(&[
            Event::new("a", EventKind::Commitment, 9.0, 11.0).unwrap(),
            Event::new("b", EventKind::Deadline, 10.0, 10.5).unwrap(),
        ]);
        let metrics = LayoutMetrics::default();

        let a = metrics.geometry(&positioned[0]);
        assert_eq!(a.left_percent, 0.0);
        assert_eq!(a.width_percent, 50.0);
        assert_eq!(a.top_px, 540.0);
        assert_eq!(a.height_px, 118.0);

        let b = metrics.geometry(&positioned[1]);
        assert_eq!(b.left_percent, 50.0);
        assert_eq!(b.top_px, 600.0);
        assert_eq!(b.height_px, 28.0);
    }

    #[test]
    fn test_geometry_never_negative_height() {
        let positioned = layout(&[Event::new("tiny", EventKind::Study, 8.0, 8.01).unwrap()]);
        let metrics = LayoutMetrics::new(48.0, 4.0);
        assert_eq!(metrics.geometry(&positioned[0]).height_px, 0.0);
        assert_eq!(metrics.day_height(), 1152.0);
    }

    #[test]
    fn test_three_columns_divide_evenly() {
        let events: Vec<_> = (0..3)
            .map(|i| Event::new(format!("e{i}"), EventKind::Study, 13.0, 14.0).unwrap())
            .collect();
        let positioned = layout(&events);
        let metrics = LayoutMetrics::default();
        let right_edge = positioned
            .iter()
            .map(|p| {
                let g = metrics.geometry(p);
                g.left_percent + g.width_percent
            })
            .fold(0.0_f32, f32::max);
        assert!((right_edge - 100.0).abs() < 1e-3);
    }
}
