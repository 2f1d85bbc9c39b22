//! Time sources.
//!
//! The clock reads two kinds of time:
//! - a monotonic millisecond counter that drives animation
//! - a civil wall-clock time that decides where the hands point
//!
//! Both are traits so hosts and tests can substitute their own sources.

mod civil;
mod monotonic;

pub use civil::{CivilClock, CivilTime, CivilTimeParseError, LocalCivil, ManualCivil};
pub use monotonic::{ManualMonotonic, MonotonicClock, SystemMonotonic};
