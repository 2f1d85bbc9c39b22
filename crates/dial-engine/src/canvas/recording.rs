use crate::coords::{Transform, Vec2};
use crate::paint::{Color, Stroke};
use crate::raster::Raster;
use crate::text::{TextBounds, Typeface};

use super::{Canvas, Surface};

/// One recorded drawing operation, in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, stroke: Stroke },
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    Text { text: String, origin: Vec2, size: f32, color: Color },
    Image { origin: Vec2, width: u32, height: u32 },
}

/// Canvas that records operations instead of rasterizing them.
///
/// The current transform is applied before recording, so a segment drawn
/// inside a rotated frame is stored where it would land on the surface.
///
/// Without a typeface, text is measured with a fixed box per character:
/// `size / 2` wide and `size * 7 / 10` tall, sitting on the baseline. This
/// keeps layout code testable without shipping font files.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    transform: Transform,
    stack: Vec<Transform>,
    typeface: Option<Typeface>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_typeface(typeface: Typeface) -> Self {
        Self { typeface: Some(typeface), ..Self::default() }
    }

    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Number of unmatched `save` calls.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Recorded segments, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, &Stroke)> {
        self.ops.iter().filter_map(|op| match op {
            CanvasOp::Line { from, to, stroke } => Some((*from, *to, stroke)),
            _ => None,
        })
    }

    /// Recorded text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.ops.iter().filter_map(|op| match op {
            CanvasOp::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let center = self.transform.apply(center);
        self.ops.push(CanvasOp::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        let center = self.transform.apply(center);
        self.ops.push(CanvasOp::StrokeCircle { center, radius, stroke: *stroke });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        let from = self.transform.apply(from);
        let to = self.transform.apply(to);
        self.ops.push(CanvasOp::Line { from, to, stroke: *stroke });
    }

    fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        if let Some(typeface) = &self.typeface {
            return typeface.text_bounds(text, size);
        }
        let n = text.chars().filter(|c| !c.is_whitespace()).count() as f32;
        if n == 0.0 || size <= 0.0 {
            return TextBounds::default();
        }
        TextBounds {
            left: 0,
            top: -((size * 7.0 / 10.0) as i32),
            right: (n * size / 2.0) as i32,
            bottom: 0,
        }
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, color: Color) {
        let origin = self.transform.apply(origin);
        self.ops.push(CanvasOp::Text { text: text.to_owned(), origin, size, color });
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn rotate(&mut self, degrees: f32, pivot: Vec2) {
        self.transform = self.transform.pre_concat(Transform::rotation_about(degrees, pivot));
    }
}

impl Surface for RecordingCanvas {
    fn draw_raster(&mut self, image: &Raster, origin: Vec2) {
        let origin = self.transform.apply(origin);
        self.ops.push(CanvasOp::Image { origin, width: image.width(), height: image.height() });
    }
}
