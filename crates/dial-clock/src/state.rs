//! Clock state shared between the UI context and the ticker thread.

use std::sync::Arc;

use dial_engine::time::CivilTime;
use parking_lot::Mutex;

use crate::animation::AnimationState;

/// Hand positions in minute-units.
///
/// `second` is the tick the second hand is heading to; `minute` and `hour`
/// include the fractional progress of the smaller units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TimeSnapshot {
    pub second: u32,
    pub minute: f32,
    pub hour: f32,
}

impl TimeSnapshot {
    pub fn from_civil(t: CivilTime) -> Self {
        let minute = t.minute as f32 + t.second as f32 / 60.0;
        let hour = (t.hour % 12) as f32 * 5.0 + minute / 12.0;
        Self { second: t.second, minute, hour }
    }

    /// Second-hand position for an animation `position` in `[0, 1]`:
    /// from the previous tick at `0` to `second` at `1`.
    #[inline]
    pub fn second_hand(&self, position: f32) -> f32 {
        (self.second as f32 - 1.0) + position
    }
}

/// Everything a single `draw` needs from the shared state, copied out under
/// the lock.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameState {
    pub time: TimeSnapshot,
    pub position: f32,
}

#[derive(Debug, Default)]
pub struct ClockState {
    /// `None` is the "no second seen yet" sentinel: the next observation
    /// always counts as a rollover.
    time: Option<TimeSnapshot>,
    animation: AnimationState,
}

impl ClockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the state a clock has right before it is shown.
    pub fn reset(&mut self) {
        self.time = None;
        self.animation = AnimationState::settled();
    }

    /// Records `civil` if its second differs from the last one seen.
    ///
    /// Returns `true` on rollover. Within the same second nothing changes.
    pub fn observe(&mut self, civil: CivilTime) -> bool {
        if self.time.is_some_and(|t| t.second == civil.second) {
            return false;
        }
        let snapshot = TimeSnapshot::from_civil(civil);
        log::debug!(
            "rollover {:.3}:{:.3}:{}",
            snapshot.hour,
            snapshot.minute,
            snapshot.second
        );
        self.time = Some(snapshot);
        true
    }

    #[inline]
    pub fn time(&self) -> Option<TimeSnapshot> {
        self.time
    }

    #[inline]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    #[inline]
    pub fn animation_mut(&mut self) -> &mut AnimationState {
        &mut self.animation
    }

    pub fn frame(&self) -> FrameState {
        FrameState {
            time: self.time.unwrap_or_default(),
            position: self.animation.position(),
        }
    }
}

pub type SharedState = Arc<Mutex<ClockState>>;
