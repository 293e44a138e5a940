use crate::domain::models::availability::AvailabilityBlock;
use crate::domain::models::rows::{AvailabilityRow, SessionRow, TeacherRow};
use crate::domain::models::session::SessionBlock;
use crate::domain::models::teacher::Teacher;
use crate::domain::services::interaction::{remove_local, upsert_local};
use tracing::warn;

/// One immutable fetch result, decoded into domain blocks. Every render
/// pass works from the latest snapshot and recomputes display events and
/// grid geometry from scratch.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSnapshot {
    /// Fetch sequence number this snapshot was issued under.
    pub seq: u64,
    pub availabilities: Vec<AvailabilityBlock>,
    pub sessions: Vec<SessionBlock>,
    pub teachers: Vec<Teacher>,
    /// Rows skipped during decode (malformed intervals), surfaced for
    /// observability.
    pub skipped_rows: usize,
}

impl ScheduleSnapshot {
    /// Decodes raw rows, isolating per-row failures: a malformed row is
    /// skipped, counted and logged, never fatal to the batch. Blocks are
    /// kept sorted by start time ascending like the store queries they
    /// came from.
    pub fn decode(
        seq: u64,
        availability_rows: &[AvailabilityRow],
        session_rows: &[SessionRow],
        teacher_rows: &[TeacherRow],
    ) -> Self {
        let mut skipped_rows = 0;

        let mut availabilities = Vec::with_capacity(availability_rows.len());
        for row in availability_rows {
            match AvailabilityBlock::from_row(row) {
                Ok(block) => availabilities.push(block),
                Err(err) => {
                    warn!(row_id = %row.id, %err, "skipping availability row");
                    skipped_rows += 1;
                }
            }
        }
        availabilities.sort_by_key(|a| a.interval.start);

        let mut sessions = Vec::with_capacity(session_rows.len());
        for row in session_rows {
            match SessionBlock::from_row(row) {
                Ok(block) => sessions.push(block),
                Err(err) => {
                    warn!(row_id = %row.id, %err, "skipping session row");
                    skipped_rows += 1;
                }
            }
        }
        sessions.sort_by_key(|s| s.interval.start);

        let teachers = teacher_rows.iter().map(Teacher::from_row).collect();

        Self { seq, availabilities, sessions, teachers, skipped_rows }
    }

    pub fn availabilities_for(&self, teacher_id: &str) -> Vec<AvailabilityBlock> {
        self.availabilities
            .iter()
            .filter(|a| a.teacher_id == teacher_id)
            .cloned()
            .collect()
    }

    pub fn sessions_for(&self, teacher_id: &str) -> Vec<SessionBlock> {
        self.sessions
            .iter()
            .filter(|s| s.teacher_id.as_deref() == Some(teacher_id))
            .cloned()
            .collect()
    }
}

/// Holds the current snapshot and guards against fetch races: navigation
/// can fire a new fetch before the previous one resolves, and a slow stale
/// response must not overwrite a fresher one. Last-write-wins is decided by
/// the monotonic sequence number issued at fetch time, not arrival order.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: ScheduleSnapshot,
    issued: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the sequence number for the next fetch. Callers tag the
    /// eventual response with it.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Installs a decoded snapshot unless a newer one already landed.
    /// Returns whether it was accepted.
    pub fn apply_fetch(&mut self, snapshot: ScheduleSnapshot) -> bool {
        if snapshot.seq <= self.current.seq {
            warn!(stale_seq = snapshot.seq, current_seq = self.current.seq, "discarding stale fetch");
            return false;
        }
        self.current = snapshot;
        true
    }

    pub fn current(&self) -> &ScheduleSnapshot {
        &self.current
    }

    /// Optimistic local mutations, pending confirmation by the next
    /// authoritative refresh.
    pub fn upsert_availability(&mut self, block: AvailabilityBlock) {
        upsert_local(&mut self.current.availabilities, block);
        self.current.availabilities.sort_by_key(|a| a.interval.start);
    }

    pub fn remove_availability(&mut self, id: &str) {
        remove_local(&mut self.current.availabilities, id);
    }

    pub fn upsert_session(&mut self, session: SessionBlock) {
        upsert_local(&mut self.current.sessions, session);
        self.current.sessions.sort_by_key(|s| s.interval.start);
    }

    pub fn remove_session(&mut self, id: &str) {
        remove_local(&mut self.current.sessions, id);
    }
}
