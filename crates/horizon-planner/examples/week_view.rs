//! Prints a week of a student's schedule as laid-out columns.
//!
//! Run with: cargo run -p horizon-planner --example week_view

use chrono::{NaiveDate, NaiveTime, Weekday};
use horizon_planner::prelude::*;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let today = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap_or_default();
    let schedule = MemorySchedule::new()
        .with_commitment(Commitment::new(
            "calc",
            "Calculus",
            [Weekday::Mon, Weekday::Wed],
            time(9, 0),
            time(10, 30),
        ))
        .with_commitment(Commitment::new(
            "lab",
            "Chemistry Lab",
            [Weekday::Wed],
            time(10, 0),
            time(12, 0),
        ))
        .with_commitment(Commitment::new(
            "gym",
            "Gym",
            [Weekday::Tue, Weekday::Thu],
            time(7, 0),
            time(8, 0),
        ))
        .with_deadline(Deadline::new(
            "essay",
            "History essay",
            today.and_time(time(11, 0)),
        ));

    let planner = Planner::new(schedule);
    planner
        .notifier()
        .subscribe(|n: &Notification| println!("[{}] {}", n.level, n.message));

    for day in planner.week(today).days {
        println!("{}", day.date.format("%A %b %-d"));
        for block in &day.blocks {
            let event = &block.positioned.event;
            println!(
                "  {:>7} - {:<7} {:<16} column {}/{}",
                format_decimal_hour_label(event.start_hour()),
                format_decimal_hour_label(event.end_hour()),
                event.title().unwrap_or_default(),
                block.positioned.column + 1,
                block.positioned.total_columns,
            );
        }
    }
}
