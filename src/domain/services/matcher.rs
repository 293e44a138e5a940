use crate::domain::models::availability::{AvailabilityBlock, AvailabilityStatus};
use crate::domain::models::interval::Interval;
use crate::domain::models::teacher::Teacher;
use std::collections::HashSet;
use tracing::warn;

/// Resolves which teachers can take a session over `desired`: every distinct
/// teacher with at least one `available` block whose interval fully contains
/// the query. An empty result is a valid outcome ("no teacher available"),
/// never an error.
///
/// Ordering is stable for display: teacher name ascending, id as tiebreak.
/// A teacher qualifying through several blocks still appears once.
pub fn find_available_teachers(
    desired: &Interval,
    pool: &[AvailabilityBlock],
    teachers: &[Teacher],
) -> Vec<Teacher> {
    let qualifying: HashSet<&str> = pool
        .iter()
        .filter(|block| {
            block.status == AvailabilityStatus::Available && block.interval.contains(desired)
        })
        .map(|block| block.teacher_id.as_str())
        .collect();

    let mut matched: Vec<Teacher> = Vec::with_capacity(qualifying.len());
    for teacher_id in &qualifying {
        match teachers.iter().find(|t| t.id == *teacher_id) {
            Some(teacher) => matched.push(teacher.clone()),
            // Availability row pointing at a teacher the store no longer
            // knows; drop it rather than render a nameless row.
            None => warn!(%teacher_id, "availability references unknown teacher"),
        }
    }

    matched.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    matched
}
