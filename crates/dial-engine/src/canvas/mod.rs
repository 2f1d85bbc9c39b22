//! Drawing surface abstraction.
//!
//! `Canvas` is the primitive set the clock paints with. `Surface` adds image
//! composition and is what a host hands to the clock's `draw`. Both are
//! object safe so renderers can take `&mut dyn Canvas`.
//!
//! Implementations in this crate:
//! - [`Raster`](crate::raster::Raster): software RGBA buffer
//! - [`RecordingCanvas`]: records operations for inspection

mod recording;

pub use recording::{CanvasOp, RecordingCanvas};

use crate::coords::Vec2;
use crate::paint::{Color, Stroke};
use crate::raster::Raster;
use crate::text::TextBounds;

/// Primitive drawing operations.
///
/// Coordinates are in the canvas' current frame; [`rotate`](Canvas::rotate)
/// changes the frame until the matching [`restore`](Canvas::restore).
pub trait Canvas {
    /// Anti-aliased filled disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Ring centered on the circle outline, `stroke.width` wide.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke);

    /// Straight segment with butt caps; the shadow, if any, is painted first.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    /// Ink bounds of `text` at `size`, relative to the baseline origin.
    fn text_bounds(&self, text: &str, size: f32) -> TextBounds;

    /// Draws `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, color: Color);

    /// Whether this canvas can measure and draw text at all.
    fn supports_text(&self) -> bool {
        true
    }

    /// Pushes the current frame.
    fn save(&mut self);

    /// Pops to the most recently saved frame. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Rotates the current frame by `degrees` (clockwise) about `pivot`.
    fn rotate(&mut self, degrees: f32, pivot: Vec2);
}

/// A host drawing surface: a canvas that can also composite images.
pub trait Surface: Canvas {
    /// Composites `image` source-over with its top-left corner at `origin`.
    fn draw_raster(&mut self, image: &Raster, origin: Vec2);
}
