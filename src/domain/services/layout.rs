use crate::domain::models::display::DisplayEvent;
use crate::domain::models::teacher::Teacher;
use crate::domain::services::windowing::{ViewMode, ViewWindow};
use crate::error::ScheduleError;
use chrono::{Duration, Timelike};
use tracing::warn;

/// Grid placement of one display event. Discarded and recomputed on every
/// render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub event_id: String,
    /// Index of the event's teacher in the resource list; also the grid row.
    pub resource_index: usize,
    pub day_index: usize,
    pub row_index: usize,
    /// Fractional hour offset from the grid origin (day/week) or the day
    /// column (month). Kept exact so a 09:30 start renders at 09:30.
    pub column_start: f64,
    /// Whole columns of width. Ceil'd separately from `column_start`: a
    /// 30-minute event still occupies one full visible column.
    pub column_span: u32,
}

#[derive(Debug, Default)]
pub struct LayoutOutcome {
    pub cells: Vec<GridGeometry>,
    /// Events dropped defensively (unknown resource or day), counted for
    /// the caller.
    pub dropped: usize,
}

/// Maps each event to a row (per resource) and a time-proportional column
/// span inside the window's day/hour grid. Windowing should already have
/// excluded out-of-range events; anything that still misses the day list is
/// dropped with a warning, never fatal. Overlapping events on the same
/// resource and day are all retained — a visible double-booking is a
/// detectable anomaly, not something to hide.
pub fn layout(events: &[DisplayEvent], resources: &[Teacher], window: &ViewWindow) -> LayoutOutcome {
    let range = window.compute_range();
    let tz = window.tz();
    let hour_count = range.hours.len() as f64;
    let mut outcome = LayoutOutcome::default();

    for ev in events {
        let Some(resource_index) = resources.iter().position(|t| t.id == ev.resource_id) else {
            let err = ScheduleError::UnknownResource(ev.resource_id.clone());
            warn!(event_id = %ev.id, %err, "dropping event");
            outcome.dropped += 1;
            continue;
        };

        let start_local = ev.interval.start.with_timezone(&tz);
        let start_date = start_local.date_naive();
        let Some(day_index) = range.days.iter().position(|d| *d == start_date) else {
            let err = ScheduleError::UnknownDay { date: start_date };
            warn!(event_id = %ev.id, %err, "dropping event");
            outcome.dropped += 1;
            continue;
        };

        let (column_start, column_span) = match window.mode {
            ViewMode::Month => {
                // Last instant of the event decides how many day columns it
                // spans; an event ending exactly at midnight stays out of
                // the next day's column.
                let last_date = (ev.interval.end - Duration::seconds(1))
                    .with_timezone(&tz)
                    .date_naive();
                let span = (last_date - start_date).num_days() + 1;
                (day_index as f64, span.max(1) as u32)
            }
            ViewMode::Day | ViewMode::Week => {
                let start_fraction = start_local.hour() as f64
                    + start_local.minute() as f64 / 60.0
                    + start_local.second() as f64 / 3600.0;
                let offset = (start_fraction - window.start_hour as f64).clamp(0.0, hour_count);
                let span = ev.interval.duration_hours().ceil();
                (day_index as f64 * hour_count + offset, span.max(1.0) as u32)
            }
        };

        outcome.cells.push(GridGeometry {
            event_id: ev.id.clone(),
            resource_index,
            day_index,
            row_index: resource_index,
            column_start,
            column_span,
        });
    }

    outcome
}
