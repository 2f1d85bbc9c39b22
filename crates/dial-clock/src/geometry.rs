//! Dial geometry.
//!
//! Positions around the face are measured in minute-units: `0` is twelve
//! o'clock, `15` three o'clock, one full turn is `60`.

use dial_engine::coords::Point;

/// Maps a minute-position on a circle of `radius` around `center` to a pixel.
///
/// Each component is truncated toward zero. Any real position is accepted;
/// values outside `[0, 60)` wrap around the dial.
pub fn point(minute_pos: f32, radius: i32, center: Point) -> Point {
    let angle = (f64::from(minute_pos) * 6.0 - 90.0).to_radians();
    let r = f64::from(radius);
    Point::new(
        center.x + (angle.cos() * r) as i32,
        center.y + (angle.sin() * r) as i32,
    )
}

/// Scales an integer radius by `factor`, truncating like the face layout does.
#[inline]
pub fn scaled(radius: i32, factor: f64) -> i32 {
    (f64::from(radius) * factor) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(0, 0);

    fn near(p: Point, x: i32, y: i32) -> bool {
        (p.x - x).abs() <= 1 && (p.y - y).abs() <= 1
    }

    #[test]
    fn zero_points_up() {
        assert!(near(point(0.0, 80, ORIGIN), 0, -80));
    }

    #[test]
    fn quarter_turns() {
        assert!(near(point(15.0, 80, ORIGIN), 80, 0));
        assert!(near(point(30.0, 80, ORIGIN), 0, 80));
        assert!(near(point(45.0, 80, ORIGIN), -80, 0));
    }

    #[test]
    fn stays_on_the_circle() {
        // Both components truncate, so the distance can fall short by up to √2.
        let center = Point::new(37, -12);
        for r in [0, 1, 7, 50, 95, 333] {
            for step in 0..600 {
                let m = step as f32 / 10.0;
                let d = point(m, r, center).distance(center);
                assert!(
                    (d - f64::from(r)).abs() <= std::f64::consts::SQRT_2,
                    "m={m} r={r} d={d}"
                );
            }
        }
    }

    #[test]
    fn negative_positions_wrap() {
        let c = Point::new(100, 100);
        assert_eq!(point(-1.0, 85, c), point(59.0, 85, c));
        assert_eq!(point(60.5, 85, c), point(0.5, 85, c));
    }

    #[test]
    fn truncates_toward_zero() {
        // 45 degrees: cos·100 = 70.71 -> 70, sin·100 = -70.71 -> -70
        assert_eq!(point(7.5, 100, ORIGIN), Point::new(70, -70));
    }

    #[test]
    fn scaled_truncates() {
        assert_eq!(scaled(95, 0.9), 85);
        assert_eq!(scaled(95, 0.05), 4);
        assert_eq!(scaled(-3, 0.5), -1);
    }
}
