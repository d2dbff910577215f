//! Column layout for the events of a single day.
//!
//! Overlapping events are rendered side by side: each event is assigned a
//! column and a column count so its box can be drawn at
//! `column / total_columns` of the day's width without colliding with any
//! event it overlaps.
//!
//! # Algorithm
//!
//! 1. Events are sorted by start hour; ties put the longer event first so it
//!    gets the lower column. Remaining ties keep input order.
//! 2. Each event takes the first column not used by an already placed event
//!    it overlaps. Its column count is the larger of `column + 1` and the
//!    counts of its overlapping neighbours, and those neighbours are raised to
//!    the same count.
//! 3. A reconciliation pass evens out column counts, see [`LayoutStrategy`].
//!
//! # Example
//!
//! ```
//! use horizon_planner_core::{layout, Event, EventKind};
//!
//! let events = vec![
//!     Event::new("a", EventKind::Commitment, 9.0, 11.0).unwrap(),
//!     Event::new("b", EventKind::Study, 10.0, 10.5).unwrap(),
//! ];
//!
//! let positioned = layout(&events);
//! assert_eq!(positioned[0].column, 0);
//! assert_eq!(positioned[1].column, 1);
//! assert!(positioned.iter().all(|p| p.total_columns == 2));
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::event::{Event, PositionedEvent};
use crate::logging::targets;

/// How column counts are reconciled after every event has been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// A single pass in placement order sets each event's count to the
    /// maximum over itself and the events it directly overlaps.
    ///
    /// Overlap is not transitive, so two events at opposite ends of a long
    /// overlap chain can keep different counts. This matches the behaviour
    /// the calendar views have always had.
    ///
    /// Two events that overlap directly can also end up with different
    /// counts, and their boxes then overlap on screen when drawn at
    /// `column / total_columns`. Use [`LayoutStrategy::Clustered`] when boxes
    /// must never intersect.
    #[default]
    Neighborhood,
    /// Every connected group of overlapping events shares the largest count
    /// found in the group.
    Clustered,
}

/// Lay out the events of one day using [`LayoutStrategy::Neighborhood`].
///
/// Returns the events in placement order (start ascending, longer first).
pub fn layout(events: &[Event]) -> Vec<PositionedEvent> {
    layout_with(events, LayoutStrategy::Neighborhood)
}

/// Lay out the events of one day with an explicit reconciliation strategy.
pub fn layout_with(events: &[Event], strategy: LayoutStrategy) -> Vec<PositionedEvent> {
    let _span = tracing::debug_span!(
        target: targets::LAYOUT,
        "layout",
        events = events.len(),
        ?strategy
    )
    .entered();

    if events.is_empty() {
        return Vec::new();
    }

    let mut positioned = place(sorted(events));
    match strategy {
        LayoutStrategy::Neighborhood => reconcile_neighborhood(&mut positioned),
        LayoutStrategy::Clustered => reconcile_clustered(&mut positioned),
    }

    tracing::trace!(
        target: targets::LAYOUT,
        max_columns = positioned.iter().map(|p| p.total_columns).max().unwrap_or(0),
        "layout complete"
    );
    positioned
}

fn sorted(events: &[Event]) -> Vec<Event> {
    let mut events = events.to_vec();
    events.sort_by(placement_order);
    events
}

/// Start ascending, then longest first. `sort_by` is stable, so full ties keep
/// input order.
fn placement_order(a: &Event, b: &Event) -> Ordering {
    a.start_hour()
        .total_cmp(&b.start_hour())
        .then_with(|| b.duration().total_cmp(&a.duration()))
}

/// First-fit column assignment over events already in placement order.
fn place(events: Vec<Event>) -> Vec<PositionedEvent> {
    let mut positioned: Vec<PositionedEvent> = Vec::with_capacity(events.len());

    for event in events {
        let overlapping: Vec<usize> = positioned
            .iter()
            .enumerate()
            .filter(|(_, existing)| existing.event.overlaps(&event))
            .map(|(index, _)| index)
            .collect();

        let mut used: Vec<usize> = overlapping.iter().map(|&i| positioned[i].column).collect();
        used.sort_unstable();
        used.dedup();
        let column = first_free_column(&used);

        let neighbour_max = overlapping
            .iter()
            .map(|&i| positioned[i].total_columns)
            .max()
            .unwrap_or(1);
        let total_columns = (column + 1).max(neighbour_max);

        for &i in &overlapping {
            positioned[i].total_columns = positioned[i].total_columns.max(total_columns);
        }

        tracing::trace!(
            target: targets::LAYOUT,
            id = %event.id(),
            column,
            total_columns,
            overlaps = overlapping.len(),
            "placed event"
        );
        positioned.push(PositionedEvent::new(event, column, total_columns));
    }

    positioned
}

/// Smallest non-negative integer missing from a sorted, deduplicated slice.
fn first_free_column(used: &[usize]) -> usize {
    used.iter()
        .enumerate()
        .find(|&(expected, &column)| expected != column)
        .map_or(used.len(), |(expected, _)| expected)
}

fn reconcile_neighborhood(positioned: &mut [PositionedEvent]) {
    for index in 0..positioned.len() {
        let max = positioned
            .iter()
            .filter(|other| other.overlaps(&positioned[index]))
            .map(|other| other.total_columns)
            .fold(positioned[index].total_columns, usize::max);
        positioned[index].total_columns = max;
    }
}

fn reconcile_clustered(positioned: &mut [PositionedEvent]) {
    let mut cluster_of: Vec<Option<usize>> = vec![None; positioned.len()];
    let mut cluster_max: Vec<usize> = Vec::new();

    for root in 0..positioned.len() {
        if cluster_of[root].is_some() {
            continue;
        }
        let cluster = cluster_max.len();
        let mut max = 0;
        let mut stack = vec![root];
        cluster_of[root] = Some(cluster);

        while let Some(current) = stack.pop() {
            max = max.max(positioned[current].total_columns);
            for next in 0..positioned.len() {
                if cluster_of[next].is_none() && positioned[next].overlaps(&positioned[current]) {
                    cluster_of[next] = Some(cluster);
                    stack.push(next);
                }
            }
        }
        cluster_max.push(max);
    }

    for (event, cluster) in positioned.iter_mut().zip(cluster_of) {
        if let Some(cluster) = cluster {
            event.total_columns = cluster_max[cluster];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn event(id: &str, start: f64, end: f64) -> Event {
        Event::new(id, EventKind::Study, start, end).unwrap()
    }

    fn find<'a>(positioned: &'a [PositionedEvent], id: &str) -> &'a PositionedEvent {
        positioned.iter().find(|p| p.id().as_str() == id).unwrap()
    }

    #[test]
    fn test_layout_empty() {
        assert!(layout(&[]).is_empty());
        assert!(layout_with(&[], LayoutStrategy::Clustered).is_empty());
    }

    #[test]
    fn test_layout_single_event() {
        let positioned = layout(&[event("a", 9.0, 10.0)]);
        assert_eq!(positioned.len(), 1);
        assert_eq!(positioned[0].column, 0);
        assert_eq!(positioned[0].total_columns, 1);
    }

    #[test]
    fn test_layout_disjoint_events_share_column() {
        let positioned = layout(&[event("a", 9.0, 10.0), event("b", 10.0, 11.0)]);
        for p in &positioned {
            assert_eq!(p.column, 0);
            assert_eq!(p.total_columns, 1);
        }
    }

    #[test]
    fn test_layout_sorts_by_start_then_longest() {
        let positioned = layout(&[
            event("late", 14.0, 15.0),
            event("short", 9.0, 9.5),
            event("long", 9.0, 12.0),
        ]);
        let ids: Vec<_> = positioned.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["long", "short", "late"]);
        assert_eq!(find(&positioned, "long").column, 0);
        assert_eq!(find(&positioned, "short").column, 1);
    }

    #[test]
    fn test_layout_keeps_input_order_on_full_tie() {
        let positioned = layout(&[event("first", 9.0, 10.0), event("second", 9.0, 10.0)]);
        assert_eq!(positioned[0].id().as_str(), "first");
        assert_eq!(positioned[0].column, 0);
        assert_eq!(positioned[1].column, 1);
    }

    #[test]
    fn test_layout_three_event_scenario() {
        let positioned = layout(&[
            event("a", 9.0, 11.0),
            event("b", 10.0, 10.5),
            event("c", 10.5, 12.0),
        ]);

        let a = find(&positioned, "a");
        let b = find(&positioned, "b");
        let c = find(&positioned, "c");

        assert_eq!((a.column, a.total_columns), (0, 2));
        assert_eq!((b.column, b.total_columns), (1, 2));
        assert_eq!((c.column, c.total_columns), (1, 2));
    }

    #[test]
    fn test_layout_reuses_freed_column() {
        // b frees column 2 before d starts, so d takes it again.
        let positioned = layout(&[
            event("a", 9.0, 13.0),
            event("b", 9.5, 10.0),
            event("c", 9.5, 11.0),
            event("d", 10.5, 12.0),
        ]);
        assert_eq!(find(&positioned, "a").column, 0);
        assert_eq!(find(&positioned, "c").column, 1);
        assert_eq!(find(&positioned, "b").column, 2);
        assert_eq!(find(&positioned, "d").column, 2);
        assert!(positioned.iter().all(|p| p.total_columns == 3));
    }

    #[test]
    fn test_layout_clique_gets_one_column_each() {
        let events: Vec<_> = (0..4).map(|i| event(&format!("e{i}"), 9.0, 10.0)).collect();
        let positioned = layout(&events);
        let mut columns: Vec<_> = positioned.iter().map(|p| p.column).collect();
        columns.sort_unstable();
        assert_eq!(columns, vec![0, 1, 2, 3]);
        assert!(positioned.iter().all(|p| p.total_columns == 4));
    }

    fn chain() -> Vec<Event> {
        // A - B - C chain leading into a three-way clique (C, D, E, F).
        vec![
            event("a", 0.0, 1.0),
            event("b", 0.5, 2.0),
            event("c", 1.5, 3.0),
            event("d", 2.5, 4.0),
            event("e", 2.5, 4.0),
            event("f", 2.5, 4.0),
        ]
    }

    #[test]
    fn test_neighborhood_reconciliation_is_local() {
        let positioned = layout_with(&chain(), LayoutStrategy::Neighborhood);
        assert_eq!(find(&positioned, "a").total_columns, 2);
        assert_eq!(find(&positioned, "b").total_columns, 4);
        assert_eq!(find(&positioned, "c").total_columns, 4);
        assert_eq!(find(&positioned, "f").column, 3);
    }

    fn horizontal_span(positioned: &PositionedEvent) -> (f64, f64) {
        let total = positioned.total_columns as f64;
        (
            positioned.column as f64 / total,
            (positioned.column + 1) as f64 / total,
        )
    }

    fn spans_intersect(a: (f64, f64), b: (f64, f64)) -> bool {
        a.0 < b.1 && b.0 < a.1
    }

    #[test]
    fn test_neighborhood_boxes_can_intersect() {
        let positioned = layout_with(&chain(), LayoutStrategy::Neighborhood);
        let a = find(&positioned, "a");
        let b = find(&positioned, "b");
        assert!(a.overlaps(b));
        assert_eq!(horizontal_span(a), (0.0, 0.5));
        assert_eq!(horizontal_span(b), (0.25, 0.5));
        assert!(spans_intersect(horizontal_span(a), horizontal_span(b)));

        let positioned = layout_with(&chain(), LayoutStrategy::Clustered);
        for (i, x) in positioned.iter().enumerate() {
            for y in &positioned[i + 1..] {
                if x.overlaps(y) {
                    assert!(!spans_intersect(horizontal_span(x), horizontal_span(y)));
                }
            }
        }
    }

    #[test]
    fn test_clustered_reconciliation_spans_chain() {
        let positioned = layout_with(&chain(), LayoutStrategy::Clustered);
        assert!(positioned.iter().all(|p| p.total_columns == 4));
    }

    #[test]
    fn test_clustered_keeps_separate_groups_apart() {
        let positioned = layout_with(
            &[
                event("a", 9.0, 10.0),
                event("b", 9.0, 10.0),
                event("c", 13.0, 14.0),
            ],
            LayoutStrategy::Clustered,
        );
        assert_eq!(find(&positioned, "a").total_columns, 2);
        assert_eq!(find(&positioned, "c").total_columns, 1);
    }

    #[test]
    fn test_first_free_column() {
        assert_eq!(first_free_column(&[]), 0);
        assert_eq!(first_free_column(&[0, 1, 2]), 3);
        assert_eq!(first_free_column(&[1, 2]), 0);
        assert_eq!(first_free_column(&[0, 2]), 1);
    }
}
