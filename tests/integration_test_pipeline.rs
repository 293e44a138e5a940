mod common;

use common::*;
use tutor_scheduler::domain::services::calendar::generate_ics;
use tutor_scheduler::domain::services::layout::layout;
use tutor_scheduler::domain::services::merger::merge_teacher_schedule;
use tutor_scheduler::domain::services::windowing::{filter_to_range, ViewMode, ViewWindow};
use tutor_scheduler::state::ScheduleSnapshot;

/// Full render pass: raw rows -> snapshot -> merge -> window filter ->
/// grid geometry, the same path a UI collaborator walks on every refresh.
#[test]
fn test_full_render_pass() {
    let availability_rows = vec![
        availability_row("a1", "t1", dt(12, 9, 0), dt(12, 12, 0)),
        availability_row("a2", "t1", dt(19, 9, 0), dt(19, 12, 0)), // next week
    ];
    let session_rows = vec![session_row("s1", Some("t1"), dt(12, 10, 0), dt(12, 10, 30), "booked")];
    let teacher_rows = vec![teacher_row("t1", "Alice")];

    let snapshot = ScheduleSnapshot::decode(1, &availability_rows, &session_rows, &teacher_rows);
    let merged = merge_teacher_schedule(
        &snapshot.availabilities_for("t1"),
        &snapshot.sessions_for("t1"),
    );
    assert_eq!(merged.events.len(), 4); // three carved on the 12th + one block on the 19th

    let window = ViewWindow::new(date(2024, 6, 12), ViewMode::Week, 8, 18, "UTC");
    let range = window.compute_range();
    let visible = filter_to_range(&merged.events, &range);
    assert_eq!(visible.len(), 3, "next week's block must be windowed out");

    let geometry = layout(&visible, &snapshot.teachers, &window);
    assert_eq!(geometry.dropped, 0);
    assert_eq!(geometry.cells.len(), 3);
    // Wednesday, ten visible hours per day, first gap starts 09:00.
    assert_eq!(geometry.cells[0].column_start, 2.0 * 10.0 + 1.0);
    assert!(geometry.cells.iter().all(|c| c.row_index == 0));
    assert!(geometry.cells.iter().all(|c| c.column_span >= 1));
}

#[test]
fn test_ics_export_contains_events_and_skips_cancelled() {
    let availability_rows = vec![availability_row("a1", "t1", dt(12, 9, 0), dt(12, 12, 0))];
    let session_rows = vec![
        session_row("s1", Some("t1"), dt(12, 10, 0), dt(12, 10, 30), "booked"),
        session_row("s2", Some("t1"), dt(12, 11, 0), dt(12, 11, 30), "cancelled"),
    ];

    let snapshot = ScheduleSnapshot::decode(1, &availability_rows, &session_rows, &[]);
    let merged = merge_teacher_schedule(
        &snapshot.availabilities_for("t1"),
        &snapshot.sessions_for("t1"),
    );

    let ics = generate_ics(&teacher("t1", "Alice"), &merged.events);
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("SUMMARY:Maths"), "booked session exported");
    assert!(ics.contains("SUMMARY:Available"), "free blocks exported");
    assert!(ics.contains("LOCATION:Room 1"));
    assert!(!ics.contains("UID:s2"), "cancelled session must be skipped");
}
