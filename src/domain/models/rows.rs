use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw read shapes handed over by the external record store. Statuses stay
/// plain strings here; normalization happens when rows are decoded into
/// domain blocks.

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AvailabilityRow {
    pub id: String,
    pub teacher_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionRow {
    pub id: String,
    pub teacher_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub capacity: i32,
    pub subject: Option<String>,
    pub venue: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeacherRow {
    pub id: String,
    pub name: String,
}
