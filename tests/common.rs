#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tutor_scheduler::domain::models::availability::{AvailabilityBlock, AvailabilityStatus};
use tutor_scheduler::domain::models::interval::Interval;
use tutor_scheduler::domain::models::rows::{AvailabilityRow, SessionRow, TeacherRow};
use tutor_scheduler::domain::models::session::{SessionBlock, SessionStatus};
use tutor_scheduler::domain::models::teacher::Teacher;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn dt(d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, d, h, min, 0).unwrap()
}

pub fn iv(start: DateTime<Utc>, end: DateTime<Utc>) -> Interval {
    Interval::new(start, end).unwrap()
}

pub fn teacher(id: &str, name: &str) -> Teacher {
    Teacher { id: id.to_string(), name: name.to_string() }
}

pub fn availability(id: &str, teacher_id: &str, interval: Interval) -> AvailabilityBlock {
    AvailabilityBlock {
        id: id.to_string(),
        teacher_id: teacher_id.to_string(),
        interval,
        status: AvailabilityStatus::Available,
    }
}

pub fn availability_with_status(
    id: &str,
    teacher_id: &str,
    interval: Interval,
    status: AvailabilityStatus,
) -> AvailabilityBlock {
    AvailabilityBlock { status, ..availability(id, teacher_id, interval) }
}

pub fn session(id: &str, teacher_id: &str, interval: Interval, status: SessionStatus) -> SessionBlock {
    SessionBlock {
        id: id.to_string(),
        teacher_id: Some(teacher_id.to_string()),
        interval,
        status,
        capacity: 4,
        subject: Some("Maths".to_string()),
        venue: Some("Room 1".to_string()),
    }
}

pub fn availability_row(id: &str, teacher_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> AvailabilityRow {
    AvailabilityRow {
        id: id.to_string(),
        teacher_id: teacher_id.to_string(),
        start_time: start,
        end_time: end,
        status: "available".to_string(),
    }
}

pub fn session_row(id: &str, teacher_id: Option<&str>, start: DateTime<Utc>, end: DateTime<Utc>, status: &str) -> SessionRow {
    SessionRow {
        id: id.to_string(),
        teacher_id: teacher_id.map(|t| t.to_string()),
        start_time: start,
        end_time: end,
        status: status.to_string(),
        capacity: 4,
        subject: Some("Maths".to_string()),
        venue: Some("Room 1".to_string()),
    }
}

pub fn teacher_row(id: &str, name: &str) -> TeacherRow {
    TeacherRow { id: id.to_string(), name: name.to_string() }
}
