use crate::domain::models::availability::AvailabilityBlock;
use crate::domain::models::display::EventKind;
use crate::domain::models::interval::Interval;
use crate::domain::models::session::SessionBlock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Write intents handed to the external persistence collaborator. The core
/// constructs these but never executes them.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateOrUpdateAvailability {
    pub id: Option<String>,
    pub teacher_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

impl CreateOrUpdateAvailability {
    /// Payload for a `CreateAvailability` interaction intent: a fresh
    /// `available` block, id assigned by the store.
    pub fn from_intent(intent: &ScheduleIntent) -> Option<Self> {
        let ScheduleIntent::CreateAvailability { teacher_id, interval } = intent else {
            return None;
        };
        Some(Self {
            id: None,
            teacher_id: teacher_id.clone(),
            start_time: interval.start,
            end_time: interval.end,
            status: "available".to_string(),
        })
    }

    /// Update payload for an existing block, carrying its current status.
    pub fn from_block(block: &AvailabilityBlock) -> Self {
        Self {
            id: Some(block.id.clone()),
            teacher_id: block.teacher_id.clone(),
            start_time: block.interval.start,
            end_time: block.interval.end,
            status: block.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateOrUpdateSession {
    pub id: Option<String>,
    pub teacher_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub capacity: i32,
    pub subject: Option<String>,
    pub venue: Option<String>,
}

impl CreateOrUpdateSession {
    pub fn from_block(session: &SessionBlock) -> Self {
        Self {
            id: Some(session.id.clone()),
            teacher_id: session.teacher_id.clone(),
            start_time: session.interval.start,
            end_time: session.interval.end,
            capacity: session.capacity,
            subject: session.subject.clone(),
            venue: session.venue.clone(),
        }
    }
}

/// Outcome of a grid interaction: what the caller should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleIntent {
    /// Pointer released over an empty cell: open a creation form (or write
    /// directly) for this candidate interval.
    CreateAvailability { teacher_id: String, interval: Interval },
    /// An availability block the current user may edit.
    EditAvailability { availability_id: String },
    /// A session an admin may edit.
    InspectSession { session_id: String },
    /// Occupied cell the current role may only look at.
    Locked { source_id: String, kind: EventKind },
}
