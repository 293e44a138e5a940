use crate::domain::models::display::{DisplayEvent, DisplayStatus};
use crate::domain::models::teacher::Teacher;
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) string for a teacher's merged schedule so
/// collaborators can feed external calendar apps. Cancelled events are left
/// out.
pub fn generate_ics(teacher: &Teacher, events: &[DisplayEvent]) -> String {
    let mut calendar = Calendar::new();
    calendar.name(&format!("Schedule for {}", teacher.name));

    for ev in events {
        if ev.status == DisplayStatus::Cancelled {
            continue;
        }

        let mut ical_event = IcalEvent::new();
        ical_event
            .summary(&ev.label)
            .starts(ev.interval.start)
            .ends(ev.interval.end)
            .uid(&ev.id);

        if let Some(venue) = &ev.metadata.venue {
            ical_event.location(venue);
        }

        calendar.push(ical_event.done());
    }

    calendar.to_string()
}
