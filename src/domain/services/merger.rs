use crate::domain::models::availability::{AvailabilityBlock, AvailabilityStatus};
use crate::domain::models::display::DisplayEvent;
use crate::domain::models::interval::Interval;
use crate::domain::models::session::SessionBlock;
use std::cmp::max;
use tracing::warn;

/// Result of one merge pass. `skipped` counts availability blocks that were
/// dropped instead of rendered, surfaced to the caller for observability.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub events: Vec<DisplayEvent>,
    pub skipped: usize,
}

/// Merges one teacher's availability blocks with the sessions that overlap
/// them into a gap-free sequence of display events: wherever a session
/// overlaps an availability block, the block is split into the free portions
/// around it and the session becomes its own event.
///
/// Callers pre-filter `sessions` to the same teacher. Cancelled availability
/// blocks are skipped outright. Overlapping availability blocks are treated
/// as a union of coverage: each block is carved independently, never an error.
pub fn merge_teacher_schedule(
    availabilities: &[AvailabilityBlock],
    sessions: &[SessionBlock],
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for block in availabilities {
        if block.status == AvailabilityStatus::Cancelled {
            outcome.skipped += 1;
            continue;
        }
        carve_block(block, sessions, &mut outcome.events);
    }

    outcome
}

/// Sweeps a cursor across `block`, emitting an `available` event for every
/// free stretch and a session event for every overlapping session. The
/// cursor only moves forward, so overlapping sessions never double-count
/// already-consumed time: a session nested inside an earlier one produces a
/// zero-length gap, which is suppressed.
fn carve_block(block: &AvailabilityBlock, sessions: &[SessionBlock], out: &mut Vec<DisplayEvent>) {
    let mut overlapping: Vec<&SessionBlock> = sessions
        .iter()
        .filter(|s| s.interval.overlaps(&block.interval))
        .collect();
    // Start ascending; shorter session first on ties keeps the carve-out
    // deterministic.
    overlapping.sort_by(|a, b| {
        a.interval
            .start
            .cmp(&b.interval.start)
            .then(a.interval.duration().cmp(&b.interval.duration()))
    });

    let mut cursor = block.interval.start;

    for session in overlapping {
        if cursor < session.interval.start {
            match Interval::new(cursor, session.interval.start) {
                Ok(gap) => out.push(DisplayEvent::availability_gap(block, gap)),
                Err(err) => warn!(availability_id = %block.id, %err, "skipping malformed gap"),
            }
        }

        out.push(DisplayEvent::from_session(session, &block.teacher_id));
        cursor = max(cursor, session.interval.end);
    }

    if cursor < block.interval.end {
        match Interval::new(cursor, block.interval.end) {
            Ok(tail) => out.push(DisplayEvent::availability_gap(block, tail)),
            Err(err) => warn!(availability_id = %block.id, %err, "skipping malformed tail"),
        }
    }
}
