use crate::domain::models::display::DisplayEvent;
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

/// Navigational state of the calendar: anchor date, view mode and the
/// visible hour band. Pure UI state, never persisted.
///
/// Weeks start on Monday throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    pub anchor: NaiveDate,
    pub mode: ViewMode,
    pub start_hour: u32,
    pub end_hour: u32,
    /// IANA timezone name resolving local day boundaries; unparseable names
    /// fall back to UTC.
    pub timezone: String,
}

/// Concrete date range derived from a `ViewWindow`: the UTC bounds used for
/// filtering, the visible days and the hour sequence for grid columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRange {
    pub range_start: DateTime<Utc>,
    /// Last instant of the final visible day (inclusive filter bound).
    pub range_end: DateTime<Utc>,
    pub days: Vec<NaiveDate>,
    pub hours: Vec<u32>,
}

impl ViewWindow {
    pub fn new(anchor: NaiveDate, mode: ViewMode, start_hour: u32, end_hour: u32, timezone: impl Into<String>) -> Self {
        Self { anchor, mode, start_hour, end_hour, timezone: timezone.into() }
    }

    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or(chrono_tz::UTC)
    }

    /// Computes the visible `[range_start, range_end]` and the day/hour
    /// sequences for the current anchor and mode.
    pub fn compute_range(&self) -> ViewRange {
        let days = match self.mode {
            ViewMode::Day => vec![self.anchor],
            ViewMode::Week => {
                let monday = self.anchor
                    - Duration::days(self.anchor.weekday().num_days_from_monday() as i64);
                (0..7).map(|i| monday + Duration::days(i)).collect()
            }
            ViewMode::Month => {
                let first = self.anchor.with_day(1).unwrap_or(self.anchor);
                let next_month = first
                    .checked_add_months(Months::new(1))
                    .unwrap_or(first);
                let mut days = Vec::new();
                let mut day = first;
                while day < next_month {
                    days.push(day);
                    day += Duration::days(1);
                }
                if days.is_empty() {
                    days.push(first);
                }
                days
            }
        };

        let tz = self.tz();
        let first = days[0];
        let last = days[days.len() - 1];

        ViewRange {
            range_start: local_instant(tz, first, 0, 0, 0),
            range_end: local_instant(tz, last, 23, 59, 59),
            days,
            hours: (self.start_hour..self.end_hour).collect(),
        }
    }

    /// Shifts the anchor forward by one unit of the current mode.
    pub fn next(&self) -> Self {
        let anchor = match self.mode {
            ViewMode::Day => self.anchor + Duration::days(1),
            ViewMode::Week => self.anchor + Duration::days(7),
            ViewMode::Month => self
                .anchor
                .checked_add_months(Months::new(1))
                .unwrap_or(self.anchor),
        };
        Self { anchor, ..self.clone() }
    }

    pub fn previous(&self) -> Self {
        let anchor = match self.mode {
            ViewMode::Day => self.anchor - Duration::days(1),
            ViewMode::Week => self.anchor - Duration::days(7),
            ViewMode::Month => self
                .anchor
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.anchor),
        };
        Self { anchor, ..self.clone() }
    }

    pub fn today(&self, today: NaiveDate) -> Self {
        Self { anchor: today, ..self.clone() }
    }

    pub fn with_mode(&self, mode: ViewMode) -> Self {
        Self { mode, ..self.clone() }
    }
}

/// Keeps events whose start falls inside the visible range, boundary day
/// included on both ends.
pub fn filter_to_range(events: &[DisplayEvent], range: &ViewRange) -> Vec<DisplayEvent> {
    events
        .iter()
        .filter(|ev| ev.interval.start >= range.range_start && ev.interval.start <= range.range_end)
        .cloned()
        .collect()
}

/// Resolves a local wall-clock time in `tz` to a UTC instant.
pub fn local_instant(tz: Tz, date: NaiveDate, h: u32, m: u32, s: u32) -> DateTime<Utc> {
    let naive = date
        .and_hms_opt(h, m, s)
        .unwrap_or_else(|| date.and_hms_opt(0, 0, 0).expect("midnight always exists"));
    // DST gaps resolve to the earliest valid local time on that day.
    match tz.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}
