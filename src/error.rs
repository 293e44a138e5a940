use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Failures are scoped to single entities: one malformed row never blocks
/// rendering the rest of the schedule. Callers get skip/drop counts for
/// observability instead of batch-level errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("Resource not found: {0}")]
    UnknownResource(String),
    #[error("Day {date} is outside the visible window")]
    UnknownDay { date: NaiveDate },
}
