mod common;

use common::*;
use tutor_scheduler::domain::models::session::SessionStatus;
use tutor_scheduler::domain::models::display::DisplayEvent;
use tutor_scheduler::domain::services::windowing::{filter_to_range, ViewMode, ViewWindow};

fn window(anchor_day: u32, mode: ViewMode) -> ViewWindow {
    ViewWindow::new(date(2024, 6, anchor_day), mode, 8, 18, "UTC")
}

fn event_starting(id: &str, day: u32, hour: u32) -> DisplayEvent {
    let start = dt(day, hour, 0);
    DisplayEvent::from_session(
        &session(id, "t1", iv(start, start + chrono::Duration::hours(1)), SessionStatus::Booked),
        "t1",
    )
}

#[test]
fn test_week_next_advances_anchor_seven_days() {
    // 2024-06-12 is a Wednesday.
    let w = window(12, ViewMode::Week);
    let next = w.next();
    assert_eq!(next.anchor, date(2024, 6, 19));

    // The new range starts on the following week's Monday.
    let range = next.compute_range();
    assert_eq!(range.days[0], date(2024, 6, 17));
}

#[test]
fn test_day_navigation_round_trip() {
    let w = window(12, ViewMode::Day);
    assert_eq!(w.next().anchor, date(2024, 6, 13));
    assert_eq!(w.previous().anchor, date(2024, 6, 11));
    assert_eq!(w.next().previous().anchor, w.anchor);
}

#[test]
fn test_today_resets_anchor() {
    let w = window(12, ViewMode::Week);
    assert_eq!(w.today(date(2024, 7, 1)).anchor, date(2024, 7, 1));
}

#[test]
fn test_day_range_is_single_day() {
    let range = window(12, ViewMode::Day).compute_range();
    assert_eq!(range.days, vec![date(2024, 6, 12)]);
    assert_eq!(range.range_start, dt(12, 0, 0));
}

#[test]
fn test_filter_keeps_events_inside_week() {
    let range = window(12, ViewMode::Week).compute_range();
    let events = vec![
        event_starting("mon", 10, 9),   // Monday of that week
        event_starting("sun", 16, 23),  // late Sunday, boundary day
        event_starting("before", 9, 12),
        event_starting("after", 17, 9),
    ];

    let kept = filter_to_range(&events, &range);
    let ids: Vec<&str> = kept.iter().map(|ev| ev.id.as_str()).collect();
    assert_eq!(ids, vec!["mon", "sun"]);
}

#[test]
fn test_filter_month_keeps_whole_month() {
    let range = window(12, ViewMode::Month).compute_range();
    let events = vec![
        event_starting("first", 1, 8),
        event_starting("last", 30, 17),
    ];
    assert_eq!(filter_to_range(&events, &range).len(), 2);
}

#[test]
fn test_view_mode_switch_keeps_anchor() {
    let w = window(12, ViewMode::Day);
    let monthly = w.with_mode(ViewMode::Month);
    assert_eq!(monthly.anchor, w.anchor);
    assert_eq!(monthly.compute_range().days.len(), 30); // June
}

#[test]
fn test_local_timezone_shifts_range_bounds() {
    // Midnight in Berlin (CEST, UTC+2) is 22:00 UTC the previous day.
    let w = ViewWindow::new(date(2024, 6, 12), ViewMode::Day, 8, 18, "Europe/Berlin");
    let range = w.compute_range();
    assert_eq!(range.range_start, dt(11, 22, 0));
}
