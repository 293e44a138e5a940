use crate::domain::models::availability::AvailabilityBlock;
use crate::domain::models::interval::Interval;
use crate::domain::models::session::{SessionBlock, SessionStatus};
use serde::{Deserialize, Serialize};

/// The one canonical status enumeration every origin variant funnels into.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Available,
    Bookable,
    Unassigned,
    Booked,
    Cancelled,
}

impl DisplayStatus {
    /// Maps heterogeneous raw status strings onto the closed enum.
    /// Unrecognized input falls open to `Available` — upstream schemas
    /// evolve independently of the display layer, so this never fails.
    /// Idempotent over the enum's own spellings.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "available" | "open" => DisplayStatus::Available,
            "bookable" | "ready" => DisplayStatus::Bookable,
            "unassigned" => DisplayStatus::Unassigned,
            "booked" => DisplayStatus::Booked,
            "cancelled" => DisplayStatus::Cancelled,
            _ => DisplayStatus::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Available => "available",
            DisplayStatus::Bookable => "bookable",
            DisplayStatus::Unassigned => "unassigned",
            DisplayStatus::Booked => "booked",
            DisplayStatus::Cancelled => "cancelled",
        }
    }
}

impl From<SessionStatus> for DisplayStatus {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Unassigned => DisplayStatus::Unassigned,
            SessionStatus::Bookable => DisplayStatus::Bookable,
            SessionStatus::Booked => DisplayStatus::Booked,
            SessionStatus::Cancelled => DisplayStatus::Cancelled,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Availability,
    Session,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EventMetadata {
    pub subject: Option<String>,
    pub venue: Option<String>,
    pub capacity: Option<i32>,
}

/// Unified render-ready event. Always derived from availability and session
/// blocks, never persisted; rebuilt on every data refresh.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayEvent {
    pub id: String,
    /// Id of the originating entity (availability block or session).
    pub source_id: String,
    /// Teacher the grid row belongs to.
    pub resource_id: String,
    pub interval: Interval,
    pub kind: EventKind,
    pub status: DisplayStatus,
    pub label: String,
    pub metadata: EventMetadata,
}

impl DisplayEvent {
    /// An available gap carved out of an availability block. The id encodes
    /// the cursor position so repeated carves of the same block stay unique.
    pub fn availability_gap(block: &AvailabilityBlock, interval: Interval) -> Self {
        Self {
            id: format!("avail-{}-{}", block.id, interval.start.to_rfc3339()),
            source_id: block.id.clone(),
            resource_id: block.teacher_id.clone(),
            interval,
            kind: EventKind::Availability,
            status: DisplayStatus::Available,
            label: "Available".to_string(),
            metadata: EventMetadata::default(),
        }
    }

    pub fn from_session(session: &SessionBlock, resource_id: &str) -> Self {
        Self {
            id: session.id.clone(),
            source_id: session.id.clone(),
            resource_id: resource_id.to_string(),
            interval: session.interval,
            kind: EventKind::Session,
            status: session.status.into(),
            label: session.subject.clone().unwrap_or_else(|| "Session".to_string()),
            metadata: EventMetadata {
                subject: session.subject.clone(),
                venue: session.venue.clone(),
                capacity: Some(session.capacity),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_statuses() {
        assert_eq!(DisplayStatus::normalize("available"), DisplayStatus::Available);
        assert_eq!(DisplayStatus::normalize("bookable"), DisplayStatus::Bookable);
        assert_eq!(DisplayStatus::normalize("unassigned"), DisplayStatus::Unassigned);
        assert_eq!(DisplayStatus::normalize("booked"), DisplayStatus::Booked);
        assert_eq!(DisplayStatus::normalize("cancelled"), DisplayStatus::Cancelled);
    }

    #[test]
    fn test_normalize_folds_legacy_spellings() {
        assert_eq!(DisplayStatus::normalize("open"), DisplayStatus::Available);
        assert_eq!(DisplayStatus::normalize("ready"), DisplayStatus::Bookable);
    }

    #[test]
    fn test_normalize_fails_open() {
        assert_eq!(DisplayStatus::normalize(""), DisplayStatus::Available);
        assert_eq!(DisplayStatus::normalize("CONFIRMED"), DisplayStatus::Available);
    }

    #[test]
    fn test_normalize_idempotent_over_own_domain() {
        for status in [
            DisplayStatus::Available,
            DisplayStatus::Bookable,
            DisplayStatus::Unassigned,
            DisplayStatus::Booked,
            DisplayStatus::Cancelled,
        ] {
            assert_eq!(DisplayStatus::normalize(status.as_str()), status);
        }
    }
}
