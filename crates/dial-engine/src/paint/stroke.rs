use crate::coords::Vec2;

use super::Color;

/// Soft drop shadow drawn underneath a stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    /// Blur radius in pixels.
    pub blur: f32,
    /// Offset from the stroke in pixels.
    pub offset: Vec2,
    pub color: Color,
}

impl Shadow {
    #[inline]
    pub const fn new(blur: f32, offset: Vec2, color: Color) -> Self {
        Self { blur, offset, color }
    }
}

/// Stroke paint: width, color and an optional shadow layer.
///
/// Line ends are butt caps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color, shadow: None }
    }

    #[inline]
    #[must_use]
    pub const fn with_shadow(self, shadow: Shadow) -> Self {
        Self { width: self.width, color: self.color, shadow: Some(shadow) }
    }
}
