//! Face dimensions and square size negotiation.

use dial_engine::coords::Point;

// ── Dimensions ────────────────────────────────────────────────────────────

/// Width of the face ring, also the margin kept between ring and bounds.
pub const STROKE_WIDTH: i32 = 5;

/// Face layout derived from the final view size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    /// Face radius; may be zero or negative for tiny views.
    pub radius: i32,
    pub center: Point,
    pub stroke_width: i32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self {
            width,
            height,
            radius: w.min(h) / 2 - STROKE_WIDTH,
            center: Point::new(w / 2, h / 2),
            stroke_width: STROKE_WIDTH,
        }
    }

    /// A face with no room to draw into.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0
    }
}

// ── size negotiation ──────────────────────────────────────────────────────

/// How binding a host's size hint is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SizeMode {
    /// The dimension must be exactly `size`.
    Exact,
    /// The dimension may be anything up to `size`.
    AtMost,
    /// No constraint; `size` is meaningless.
    Unspecified,
}

/// One dimension's constraint as handed down by the host layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SizeHint {
    pub mode: SizeMode,
    pub size: u32,
}

impl SizeHint {
    #[inline]
    pub const fn exact(size: u32) -> Self {
        Self { mode: SizeMode::Exact, size }
    }

    #[inline]
    pub const fn at_most(size: u32) -> Self {
        Self { mode: SizeMode::AtMost, size }
    }

    #[inline]
    pub const fn unspecified() -> Self {
        Self { mode: SizeMode::Unspecified, size: 0 }
    }
}

/// Picks the final `(width, height)` for the clock, which prefers a square.
///
/// Rules, applied in order:
/// 1) an unspecified dimension takes `suggested_minimum`, or the other
///    dimension when that is zero; a non-zero minimum also caps an at-most peer
/// 2) an exact dimension forces an unspecified peer to match and caps an
///    at-most peer
/// 3) at-most dimensions shrink to the smaller of the two
pub fn negotiate(width: SizeHint, height: SizeHint, suggested_minimum: u32) -> (u32, u32) {
    use SizeMode::{AtMost, Exact, Unspecified};

    let (mut w, mut h) = (width.size, height.size);

    if width.mode == Unspecified {
        w = suggested_minimum;
        if w == 0 {
            w = h;
        } else if height.mode == AtMost {
            h = w;
        }
    }

    if height.mode == Unspecified {
        h = suggested_minimum;
        if h == 0 {
            h = w;
        } else if width.mode == AtMost {
            w = h;
        }
    }

    if width.mode == Exact {
        match height.mode {
            Unspecified => h = w,
            AtMost => h = w.min(h),
            Exact => {}
        }
    }

    if height.mode == Exact {
        match width.mode {
            Unspecified => w = h,
            AtMost => w = w.min(h),
            Exact => {}
        }
    }

    if width.mode == AtMost {
        w = w.min(h);
    }
    if height.mode == AtMost {
        h = w.min(h);
    }

    (w, h)
}
