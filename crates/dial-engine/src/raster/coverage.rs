//! Analytic pixel coverage for the software raster.
//!
//! Every function takes signed distances measured from a pixel center and
//! returns coverage in `[0, 1]`. Edges get a one pixel ramp; shadows widen
//! the ramp to the blur radius.

use crate::coords::Vec2;

/// `inside` is the distance from the edge into the shape (negative = outside).
#[inline]
pub(super) fn edge(inside: f32) -> f32 {
    (inside + 0.5).clamp(0.0, 1.0)
}

/// Like [`edge`] with the ramp spread across `2 * blur` pixels.
#[inline]
pub(super) fn soft_edge(inside: f32, blur: f32) -> f32 {
    if blur <= 0.5 {
        edge(inside)
    } else {
        ((inside + blur) / (2.0 * blur)).clamp(0.0, 1.0)
    }
}

#[inline]
pub(super) fn disc(p: Vec2, center: Vec2, radius: f32) -> f32 {
    edge(radius - (p - center).length())
}

#[inline]
pub(super) fn ring(p: Vec2, center: Vec2, radius: f32, half_width: f32, blur: f32) -> f32 {
    let d = (p - center).length();
    soft_edge(half_width - (d - radius).abs(), blur)
}

/// Butt-capped segment from `a` to `b`. Degenerate segments cover nothing.
pub(super) fn segment(p: Vec2, a: Vec2, b: Vec2, half_width: f32, blur: f32) -> f32 {
    let ab = b - a;
    let len = ab.length();
    if len <= f32::EPSILON {
        return 0.0;
    }
    let dir = ab * (1.0 / len);
    let ap = p - a;
    let along = ap.dot(dir);
    let across = ap.cross(dir).abs();
    soft_edge(half_width - across, blur) * soft_edge(along.min(len - along), blur)
}
