use crate::domain::models::interval::Interval;
use crate::domain::models::rows::SessionRow;
use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Unassigned,
    Bookable,
    Booked,
    Cancelled,
}

impl SessionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "booked" => SessionStatus::Booked,
            "cancelled" => SessionStatus::Cancelled,
            "unassigned" => SessionStatus::Unassigned,
            _ => SessionStatus::Bookable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Unassigned => "unassigned",
            SessionStatus::Bookable => "bookable",
            SessionStatus::Booked => "booked",
            SessionStatus::Cancelled => "cancelled",
        }
    }
}

/// A concrete scheduled teaching slot, optionally assigned to a teacher.
/// Subject and venue are opaque references, only threaded through for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionBlock {
    pub id: String,
    pub teacher_id: Option<String>,
    pub interval: Interval,
    pub status: SessionStatus,
    pub capacity: i32,
    pub subject: Option<String>,
    pub venue: Option<String>,
}

impl SessionBlock {
    pub fn new(teacher_id: Option<String>, interval: Interval, capacity: i32) -> Self {
        let status = if teacher_id.is_some() {
            SessionStatus::Bookable
        } else {
            SessionStatus::Unassigned
        };
        Self {
            id: Uuid::new_v4().to_string(),
            teacher_id,
            interval,
            status,
            capacity,
            subject: None,
            venue: None,
        }
    }

    pub fn from_row(row: &SessionRow) -> Result<Self, ScheduleError> {
        let interval = Interval::new(row.start_time, row.end_time)?;
        // An unassigned session wins over whatever status the row carries.
        let status = if row.teacher_id.is_none() {
            SessionStatus::Unassigned
        } else {
            SessionStatus::parse(&row.status)
        };
        Ok(Self {
            id: row.id.clone(),
            teacher_id: row.teacher_id.clone(),
            interval,
            status,
            capacity: row.capacity,
            subject: row.subject.clone(),
            venue: row.venue.clone(),
        })
    }
}
