use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use parking_lot::Mutex;

/// Wall-clock time of day, 24-hour.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    /// Reads hour, minute and second from any `chrono` time-of-day value.
    pub fn from_timelike(t: &impl Timelike) -> Self {
        Self::new(t.hour(), t.minute(), t.second())
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for CivilTime {
    type Err = CivilTimeParseError;

    /// Parses `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .map(|t| Self::from_timelike(&t))
            .map_err(|e| CivilTimeParseError(format!("{s:?}: {e}")))
    }
}

/// Error returned when a time string is not `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq)]
pub struct CivilTimeParseError(pub String);

impl fmt::Display for CivilTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time {}", self.0)
    }
}

impl std::error::Error for CivilTimeParseError {}

/// Source of civil time.
///
/// `None` means the read failed; callers keep whatever they showed last.
pub trait CivilClock: Send + Sync {
    fn now(&self) -> Option<CivilTime>;
}

/// The host's local time zone, via `chrono::Local`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalCivil;

impl CivilClock for LocalCivil {
    fn now(&self) -> Option<CivilTime> {
        Some(CivilTime::from_timelike(&chrono::Local::now()))
    }
}

/// Civil clock that reports whatever it was last set to.
#[derive(Debug, Default)]
pub struct ManualCivil {
    time: Mutex<Option<CivilTime>>,
}

impl ManualCivil {
    pub fn new(time: CivilTime) -> Self {
        Self { time: Mutex::new(Some(time)) }
    }

    /// A clock whose reads fail until [`set`](Self::set) is called.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set(&self, time: CivilTime) {
        *self.time.lock() = Some(time);
    }

    pub fn clear(&self) {
        *self.time.lock() = None;
    }
}

impl CivilClock for ManualCivil {
    fn now(&self) -> Option<CivilTime> {
        *self.time.lock()
    }
}
