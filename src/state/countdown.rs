//! Countdown to the next contest

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::time::{Duration, Instant};

/// Start of the next contest when no target is configured
pub const DEFAULT_TARGET: &str = "2025-04-21T10:00:00";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Split a millisecond difference. Zero or negative differences clamp to all-zero.
    pub fn from_millis(difference: i64) -> Self {
        if difference <= 0 {
            return Self::default();
        }
        Self {
            days: difference / MS_PER_DAY,
            hours: (difference % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (difference % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (difference % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Values paired with their unit labels, largest unit first
    pub fn units(&self) -> [(i64, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Minutes"),
            (self.seconds, "Seconds"),
        ]
    }
}

/// Derived countdown state, refreshed at most once per second
#[derive(Debug)]
pub struct CountdownTimer {
    target: DateTime<Local>,
    time_left: TimeLeft,
    last_refresh: Option<Instant>,
}

impl CountdownTimer {
    const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(target: DateTime<Local>) -> Self {
        let mut timer = Self {
            target,
            time_left: TimeLeft::default(),
            last_refresh: None,
        };
        timer.tick();
        timer
    }

    /// Build a countdown from a wall-clock time in the local timezone
    pub fn from_naive(target: NaiveDateTime) -> Self {
        let local = Local
            .from_local_datetime(&target)
            .earliest()
            .unwrap_or_else(|| target.and_utc().with_timezone(&Local));
        Self::new(local)
    }

    /// Recompute if a second has passed since the last refresh
    pub fn tick(&mut self) {
        let due = self
            .last_refresh
            .map_or(true, |last| last.elapsed() >= Self::REFRESH_INTERVAL);
        if due {
            self.refresh_at(Local::now());
            self.last_refresh = Some(Instant::now());
        }
    }

    /// Recompute against an explicit current time
    pub fn refresh_at(&mut self, now: DateTime<Local>) {
        let difference = (self.target - now).num_milliseconds();
        self.time_left = TimeLeft::from_millis(difference);
    }

    pub fn time_left(&self) -> TimeLeft {
        self.time_left
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn has_started(&self) -> bool {
        self.time_left.is_zero()
    }
}
