//! Second-hand animation state.
//!
//! After every second rollover the hand travels from the previous tick to
//! the new one in [`ANIMATION_MILLIS`], following [`bounce`], and then rests
//! for the remainder of the second.

use crate::easing::bounce;

/// Animation progress units per second of elapsed time.
pub const ANIMATION_SPEED: u64 = 4;

/// Duration of one tick animation.
pub const ANIMATION_MILLIS: u64 = 1000 / ANIMATION_SPEED;

/// Normalized animation time for a tick that started at `start_millis`.
///
/// Grows linearly and is clamped at `1.0`. A clock that reads earlier than
/// the start yields `0.0`.
pub fn delta(start_millis: u64, now_millis: u64) -> f32 {
    let elapsed = now_millis.saturating_sub(start_millis);
    (elapsed as f32 * ANIMATION_SPEED as f32 / 1000.0).min(1.0)
}

/// Progress of the current tick animation.
///
/// `delta == 1.0` is terminal: the hand sits on its target until the next
/// [`restart`](Self::restart).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationState {
    /// Monotonic start of the running tick. `None` until the first rollover
    /// after showing; such a state settles on its first advance.
    start_millis: Option<u64>,
    delta: f32,
    position: f32,
}

impl AnimationState {
    /// The state a freshly shown clock starts from: hand drawn on target,
    /// one pending advance to settle it.
    pub const fn settled() -> Self {
        Self { start_millis: None, delta: 0.0, position: 1.0 }
    }

    /// Starts a new tick animation at `now_millis`.
    pub fn restart(&mut self, now_millis: u64) {
        self.start_millis = Some(now_millis);
        self.delta = 0.0;
        self.position = 0.0;
    }

    /// Whether the animation has not yet reached its terminal state.
    #[inline]
    pub fn in_flight(&self) -> bool {
        self.delta < 1.0
    }

    /// Recomputes delta and position from the monotonic clock.
    ///
    /// Returns `true` when the state was still in flight, i.e. the visible
    /// hand may have moved and a repaint is due. Terminal states are left
    /// untouched and return `false`.
    pub fn advance(&mut self, now_millis: u64) -> bool {
        if !self.in_flight() {
            return false;
        }
        self.delta = self.start_millis.map_or(1.0, |start| delta(start, now_millis));
        self.position = bounce(self.delta);
        true
    }

    #[inline]
    pub fn start_millis(&self) -> Option<u64> {
        self.start_millis
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Eased progress from the previous tick (`0`) to the target tick (`1`).
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::settled()
    }
}
