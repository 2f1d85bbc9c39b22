//! Per-frame hand strokes.

use dial_engine::canvas::Canvas;
use dial_engine::coords::{Point, Vec2};
use dial_engine::paint::{Color, Shadow, Stroke};

use crate::geometry::{point, scaled};
use crate::sizing::Dimensions;
use crate::state::FrameState;

/// Drop shadow shared by all hands.
pub const HAND_SHADOW: Shadow = Shadow::new(5.0, Vec2::new(3.0, 3.0), Color::BLACK);

/// Look of one hand: stroke color and width, and how far it reaches as a
/// fraction of the face radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub color: Color,
    pub width: f32,
    pub reach: f64,
}

impl HandStyle {
    #[inline]
    pub const fn stroke(&self) -> Stroke {
        Stroke::new(self.width, self.color).with_shadow(HAND_SHADOW)
    }

    /// Tip of this hand at minute-position `pos`.
    #[inline]
    pub fn tip(&self, pos: f32, dims: &Dimensions) -> Point {
        point(pos, scaled(dims.radius, self.reach), dims.center)
    }
}

pub const HOUR_HAND: HandStyle = HandStyle { color: Color::YELLOW, width: 12.0, reach: 0.6 };
pub const MINUTE_HAND: HandStyle = HandStyle { color: Color::YELLOW, width: 7.0, reach: 0.8 };
pub const SECOND_HAND: HandStyle = HandStyle { color: Color::RED, width: 3.0, reach: 0.9 };

/// Where the three hands end for a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HandTips {
    pub hour: Point,
    pub minute: Point,
    pub second: Point,
}

pub fn tips(dims: &Dimensions, frame: &FrameState) -> HandTips {
    let time = &frame.time;
    HandTips {
        hour: HOUR_HAND.tip(time.hour, dims),
        minute: MINUTE_HAND.tip(time.minute, dims),
        second: SECOND_HAND.tip(time.second_hand(frame.position), dims),
    }
}

/// Strokes hour, minute and second hand in that order, so the second hand
/// ends up on top.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, dims: &Dimensions, frame: &FrameState) {
    let center = Vec2::from(dims.center);
    let tips = tips(dims, frame);

    for (style, tip) in [
        (HOUR_HAND, tips.hour),
        (MINUTE_HAND, tips.minute),
        (SECOND_HAND, tips.second),
    ] {
        canvas.stroke_line(center, Vec2::from(tip), &style.stroke());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::canvas::RecordingCanvas;
    use dial_engine::time::CivilTime;

    use crate::easing::bounce;
    use crate::state::TimeSnapshot;

    fn frame(h: u32, m: u32, s: u32, position: f32) -> FrameState {
        FrameState { time: TimeSnapshot::from_civil(CivilTime::new(h, m, s)), position }
    }

    #[test]
    fn noon_points_everything_up() {
        let dims = Dimensions::new(200, 200);
        let t = tips(&dims, &frame(12, 0, 0, 1.0));
        assert_eq!(t.hour, Point::new(100, 100 - 57));
        assert_eq!(t.minute, Point::new(100, 100 - 76));
        assert_eq!(t.second, Point::new(100, 100 - 85));
    }

    #[test]
    fn resting_second_hand_sits_on_its_tick() {
        let dims = Dimensions::new(320, 240);
        for s in [0, 7, 30, 59] {
            let t = tips(&dims, &frame(8, 41, s, 1.0));
            assert_eq!(t.second, point(s as f32, scaled(dims.radius, 0.9), dims.center));
        }
    }

    #[test]
    fn animating_second_hand_starts_from_previous_tick() {
        let dims = Dimensions::new(200, 200);
        let t = tips(&dims, &frame(1, 1, 6, 0.0));
        assert_eq!(t.second, point(5.0, 85, dims.center));

        let t = tips(&dims, &frame(1, 1, 6, bounce(0.5)));
        assert_eq!(t.second, point(5.0 + bounce(0.5), 85, dims.center));
    }

    #[test]
    fn strokes_in_order_with_shadow() {
        let dims = Dimensions::new(200, 200);
        let mut canvas = RecordingCanvas::new();
        render(&mut canvas, &dims, &frame(3, 0, 0, 1.0));

        let lines: Vec<_> = canvas.lines().collect();
        assert_eq!(lines.len(), 3);
        let widths: Vec<f32> = lines.iter().map(|(_, _, s)| s.width).collect();
        assert_eq!(widths, [12.0, 7.0, 3.0]);
        assert_eq!(lines[2].2.color, Color::RED);
        assert!(lines.iter().all(|(from, _, s)| {
            *from == Vec2::new(100.0, 100.0) && s.shadow == Some(HAND_SHADOW)
        }));
        // hour hand at three o'clock
        assert_eq!(lines[0].1, Vec2::new(157.0, 100.0));
    }
}
