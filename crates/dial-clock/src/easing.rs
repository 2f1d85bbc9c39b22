//! Bounce easing for the second hand.

const N1: f32 = 7.5625;
const D1: f32 = 2.75;

/// Damped bounce on `[0, 1]`.
///
/// The curve reaches 1 at `1/2.75`, then rebounds three times with
/// shrinking amplitude (dipping to 0.75, 0.9375 and 0.984375) before
/// settling. Inputs are clamped, and both endpoints are exact.
pub fn bounce(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(bounce(0.0), 0.0);
        assert_eq!(bounce(1.0), 1.0);
        assert_eq!(bounce(-3.0), 0.0);
        assert_eq!(bounce(7.0), 1.0);
    }

    #[test]
    fn stays_in_unit_range() {
        for i in 0..=1000 {
            let v = bounce(i as f32 / 1000.0);
            assert!((0.0..=1.0 + 1e-5).contains(&v), "bounce({}) = {v}", i as f32 / 1000.0);
        }
    }

    #[test]
    fn has_three_damped_rebounds() {
        let dips = [
            bounce(1.5 / D1),
            bounce(2.25 / D1),
            bounce(2.625 / D1),
        ];
        assert!(close(dips[0], 0.75));
        assert!(close(dips[1], 0.9375));
        assert!(close(dips[2], 0.984375));
        assert!(dips[0] < dips[1] && dips[1] < dips[2] && dips[2] < 1.0);
    }

    #[test]
    fn counts_local_minima() {
        let samples: Vec<f32> = (0..=2000).map(|i| bounce(i as f32 / 2000.0)).collect();
        let minima = samples
            .windows(3)
            .filter(|w| w[1] < w[0] && w[1] <= w[2])
            .count();
        assert_eq!(minima, 3);
    }

    #[test]
    fn midpoint_value() {
        assert!(close(bounce(0.5), 0.765625));
    }
}
