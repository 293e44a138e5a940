use crate::domain::models::interval::Interval;
use crate::domain::models::rows::AvailabilityRow;
use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Consumed,
    Cancelled,
}

impl AvailabilityStatus {
    /// Lenient parse: origin schemas drift, anything unrecognized counts
    /// as an open block.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "consumed" | "ready" => AvailabilityStatus::Consumed,
            "cancelled" => AvailabilityStatus::Cancelled,
            _ => AvailabilityStatus::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Consumed => "consumed",
            AvailabilityStatus::Cancelled => "cancelled",
        }
    }
}

/// A teacher-declared open interval during which they can be scheduled.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AvailabilityBlock {
    pub id: String,
    pub teacher_id: String,
    pub interval: Interval,
    pub status: AvailabilityStatus,
}

impl AvailabilityBlock {
    pub fn new(teacher_id: String, interval: Interval) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            teacher_id,
            interval,
            status: AvailabilityStatus::Available,
        }
    }

    pub fn from_row(row: &AvailabilityRow) -> Result<Self, ScheduleError> {
        let interval = Interval::new(row.start_time, row.end_time)?;
        Ok(Self {
            id: row.id.clone(),
            teacher_id: row.teacher_id.clone(),
            interval,
            status: AvailabilityStatus::parse(&row.status),
        })
    }
}
