use crate::config::SchedulerConfig;
use crate::domain::models::availability::AvailabilityBlock;
use crate::domain::models::display::{DisplayEvent, EventKind};
use crate::domain::models::intent::ScheduleIntent;
use crate::domain::models::interval::Interval;
use crate::domain::models::session::SessionBlock;
use crate::domain::models::teacher::SessionContext;
use crate::domain::services::windowing::local_instant;
use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use tracing::warn;

/// An empty grid cell the pointer can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub resource_id: String,
    pub day: NaiveDate,
    pub hour: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CellState {
    Idle,
    Armed(GridCell),
}

/// Per-grid pointer state machine: idle -> armed (pointer down on an empty
/// cell) -> intent emitted (pointer up) -> idle. The controller only
/// computes candidate intervals and intents; persistence stays with the
/// caller.
#[derive(Debug, Clone)]
pub struct SlotInteraction {
    default_slot_minutes: i64,
    timezone: String,
    state: CellState,
}

impl SlotInteraction {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            default_slot_minutes: config.default_slot_minutes,
            timezone: config.timezone.clone(),
            state: CellState::Idle,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, CellState::Armed(_))
    }

    pub fn pointer_down(&mut self, cell: GridCell) {
        if self.state == CellState::Idle {
            self.state = CellState::Armed(cell);
        }
    }

    /// Releases the pointer. When armed, emits a `CreateAvailability` intent
    /// for the cell's hour with the configured default duration.
    pub fn pointer_up(&mut self) -> Option<ScheduleIntent> {
        let CellState::Armed(cell) = std::mem::replace(&mut self.state, CellState::Idle) else {
            return None;
        };

        let tz: Tz = self.timezone.parse().unwrap_or(chrono_tz::UTC);
        let start = local_instant(tz, cell.day, cell.hour, 0, 0);
        let end = start + Duration::minutes(self.default_slot_minutes);
        match Interval::new(start, end) {
            Ok(interval) => Some(ScheduleIntent::CreateAvailability {
                teacher_id: cell.resource_id,
                interval,
            }),
            Err(err) => {
                warn!(%err, "discarding degenerate candidate slot");
                None
            }
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.state = CellState::Idle;
    }

    /// Interaction with an occupied cell: edit, inspect or locked depending
    /// on what the event is and who is asking. Sessions are only editable
    /// by admins; availability blocks by admins or their owning teacher.
    pub fn event_click(&self, event: &DisplayEvent, ctx: &SessionContext) -> ScheduleIntent {
        match event.kind {
            EventKind::Session => {
                if ctx.role.can_edit_sessions() {
                    ScheduleIntent::InspectSession { session_id: event.source_id.clone() }
                } else {
                    ScheduleIntent::Locked {
                        source_id: event.source_id.clone(),
                        kind: EventKind::Session,
                    }
                }
            }
            EventKind::Availability => {
                if ctx.role.can_edit_sessions() || ctx.user_id == event.resource_id {
                    ScheduleIntent::EditAvailability { availability_id: event.source_id.clone() }
                } else {
                    ScheduleIntent::Locked {
                        source_id: event.source_id.clone(),
                        kind: EventKind::Availability,
                    }
                }
            }
        }
    }
}

/// Entities that can live in an optimistic in-memory collection.
pub trait LocalEntity {
    fn local_id(&self) -> &str;
}

impl LocalEntity for AvailabilityBlock {
    fn local_id(&self) -> &str {
        &self.id
    }
}

impl LocalEntity for SessionBlock {
    fn local_id(&self) -> &str {
        &self.id
    }
}

impl LocalEntity for DisplayEvent {
    fn local_id(&self) -> &str {
        &self.id
    }
}

/// Replace-by-id or append. Reflects a pending write before the external
/// store confirms it; the next authoritative refresh overwrites the list.
pub fn upsert_local<T: LocalEntity>(collection: &mut Vec<T>, entity: T) {
    match collection.iter().position(|e| e.local_id() == entity.local_id()) {
        Some(idx) => collection[idx] = entity,
        None => collection.push(entity),
    }
}

pub fn remove_local<T: LocalEntity>(collection: &mut Vec<T>, id: &str) {
    collection.retain(|e| e.local_id() != id);
}
