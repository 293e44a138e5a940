use std::env;

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// First grid hour (inclusive), local to `timezone`.
    pub start_hour: u32,
    /// Last grid hour (exclusive).
    pub end_hour: u32,
    /// Duration of the candidate interval created from an empty-cell click.
    pub default_slot_minutes: i64,
    /// IANA timezone name used to resolve view-window day boundaries.
    pub timezone: String,
}

impl SchedulerConfig {
    pub fn from_env() -> Self {
        Self {
            start_hour: env::var("SCHEDULER_START_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            end_hour: env::var("SCHEDULER_END_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(18),
            default_slot_minutes: env::var("SCHEDULER_DEFAULT_SLOT_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            timezone: env::var("SCHEDULER_TIMEZONE").unwrap_or_else(|_| "UTC".to_string()),
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 18,
            default_slot_minutes: 60,
            timezone: "UTC".to_string(),
        }
    }
}
