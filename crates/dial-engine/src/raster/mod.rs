//! Software RGBA raster.
//!
//! `Raster` is an offscreen 8-bit RGBA buffer (straight alpha, as stored by
//! `image`) that implements [`Canvas`] and [`Surface`]. The clock keeps its
//! pre-rendered face in one, and headless hosts composite whole frames into
//! one before writing them out.
//!
//! Blending is source-over in premultiplied space; pixels are converted on
//! every write. Rotation is supported for geometry; text keeps its upright
//! orientation and only its origin is transformed.

mod coverage;

use std::path::Path;

use image::{ImageFormat, ImageResult, Rgba, RgbaImage};

use crate::canvas::{Canvas, Surface};
use crate::coords::{Transform, Vec2};
use crate::paint::{Color, Stroke};
use crate::text::{TextBounds, Typeface};

pub struct Raster {
    pixels: RgbaImage,
    typeface: Option<Typeface>,
    transform: Transform,
    stack: Vec<Transform>,
}

impl Raster {
    /// Creates a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            typeface: None,
            transform: Transform::identity(),
            stack: Vec::new(),
        }
    }

    /// Sets the typeface used by the text primitives.
    #[must_use]
    pub fn with_typeface(mut self, typeface: Option<Typeface>) -> Self {
        self.typeface = typeface;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Reads a pixel back as a premultiplied color. `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        Some(Color::from_srgb_u8(r, g, b, a))
    }

    /// Overwrites every pixel with `color` and resets the frame stack.
    pub fn fill(&mut self, color: Color) {
        let px = Rgba(color.to_srgb_u8());
        for p in self.pixels.pixels_mut() {
            *p = px;
        }
        self.transform = Transform::identity();
        self.stack.clear();
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.pixels.save_with_format(path, ImageFormat::Png)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width() || y >= self.height() {
            return;
        }
        let px = self.pixels.get_pixel_mut(x, y);
        let [r, g, b, a] = px.0;
        let dst = Color::from_srgb_u8(r, g, b, a);
        *px = Rgba(color.scaled(coverage.min(1.0)).over(dst).to_srgb_u8());
    }

    /// Evaluates `coverage` at every pixel center inside `[min, max]`.
    fn paint_region(&mut self, min: Vec2, max: Vec2, color: Color, coverage: impl Fn(Vec2) -> f32) {
        if color.is_transparent() || !min.is_finite() || !max.is_finite() {
            return;
        }
        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(i64::from(self.width()));
        let y1 = (max.y.ceil() as i64).min(i64::from(self.height()));

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let c = coverage(p);
                if c > 0.0 {
                    self.blend(x as i32, y as i32, color, c);
                }
            }
        }
    }

    fn paint_segment(&mut self, a: Vec2, b: Vec2, half_width: f32, blur: f32, color: Color) {
        let pad = half_width + blur + 1.0;
        let min = Vec2::new(a.x.min(b.x) - pad, a.y.min(b.y) - pad);
        let max = Vec2::new(a.x.max(b.x) + pad, a.y.max(b.y) + pad);
        self.paint_region(min, max, color, |p| coverage::segment(p, a, b, half_width, blur));
    }

    fn paint_ring(&mut self, center: Vec2, radius: f32, half_width: f32, blur: f32, color: Color) {
        let pad = Vec2::new(1.0, 1.0) * (radius + half_width + blur + 1.0);
        self.paint_region(center - pad, center + pad, color, |p| {
            coverage::ring(p, center, radius, half_width, blur)
        });
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("typeface", &self.typeface)
            .finish()
    }
}

impl Canvas for Raster {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let center = self.transform.apply(center);
        let pad = Vec2::new(1.0, 1.0) * (radius + 1.0);
        self.paint_region(center - pad, center + pad, color, |p| coverage::disc(p, center, radius));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        if radius <= 0.0 || stroke.width <= 0.0 {
            return;
        }
        let center = self.transform.apply(center);
        let half = stroke.width / 2.0;
        if let Some(shadow) = stroke.shadow {
            self.paint_ring(center + shadow.offset, radius, half, shadow.blur, shadow.color);
        }
        self.paint_ring(center, radius, half, 0.0, stroke.color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        if stroke.width <= 0.0 {
            return;
        }
        let a = self.transform.apply(from);
        let b = self.transform.apply(to);
        let half = stroke.width / 2.0;
        if let Some(shadow) = stroke.shadow {
            self.paint_segment(a + shadow.offset, b + shadow.offset, half, shadow.blur, shadow.color);
        }
        self.paint_segment(a, b, half, 0.0, stroke.color);
    }

    fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        self.typeface
            .as_ref()
            .map(|t| t.text_bounds(text, size))
            .unwrap_or_default()
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, color: Color) {
        let Some(typeface) = self.typeface.as_ref() else { return };
        if color.is_transparent() {
            return;
        }
        let glyphs = typeface.glyphs(text, size);
        let origin = self.transform.apply(origin);
        let (ox, oy) = (origin.x.round() as i32, origin.y.round() as i32);

        for g in glyphs {
            for row in 0..g.height {
                for col in 0..g.width {
                    let c = f32::from(g.coverage[row * g.width + col]) / 255.0;
                    self.blend(ox + g.x + col as i32, oy + g.y + row as i32, color, c);
                }
            }
        }
    }

    fn supports_text(&self) -> bool {
        self.typeface.is_some()
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

impl Surface for Raster {
    fn draw_raster(&mut self, image: &Raster, origin: Vec2) {
        let origin = self.transform.apply(origin);
        let (ox, oy) = (origin.x.round() as i32, origin.y.round() as i32);
        for (x, y, px) in image.pixels.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            if a == 0 {
                continue;
            }
            self.blend(ox + x as i32, oy + y as i32, Color::from_srgb_u8(r, g, b, a), 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Shadow;

    fn opaque(c: Option<Color>) -> bool {
        c.is_some_and(|c| c.a > 0.99)
    }

    #[test]
    fn new_raster_is_transparent() {
        let r = Raster::new(4, 3);
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 3);
        assert_eq!(r.pixel(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(r.pixel(4, 0), None);
    }

    #[test]
    fn disc_fills_center_not_corners() {
        let mut r = Raster::new(20, 20);
        r.fill_circle(Vec2::new(10.0, 10.0), 6.0, Color::RED);
        assert_eq!(r.pixel(10, 10), Some(Color::RED));
        assert_eq!(r.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn ring_leaves_center_empty() {
        let mut r = Raster::new(40, 40);
        r.stroke_circle(Vec2::new(20.0, 20.0), 15.0, &Stroke::new(4.0, Color::WHITE));
        assert_eq!(r.pixel(20, 20), Some(Color::TRANSPARENT));
        assert!(opaque(r.pixel(35, 20)));
    }

    #[test]
    fn line_paints_between_endpoints_only() {
        let mut r = Raster::new(30, 30);
        r.stroke_line(Vec2::new(5.0, 15.0), Vec2::new(25.0, 15.0), &Stroke::new(3.0, Color::YELLOW));
        assert_eq!(r.pixel(15, 14), Some(Color::YELLOW));
        assert_eq!(r.pixel(2, 14), Some(Color::TRANSPARENT));
        assert_eq!(r.pixel(15, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn shadow_lands_at_offset_under_stroke() {
        let mut r = Raster::new(40, 40);
        let stroke = Stroke::new(2.0, Color::WHITE)
            .with_shadow(Shadow::new(2.0, Vec2::new(0.0, 6.0), Color::BLACK));
        r.stroke_line(Vec2::new(5.0, 10.0), Vec2::new(35.0, 10.0), &stroke);

        let shadow = r.pixel(20, 16).unwrap();
        assert!(shadow.a > 0.0);
        assert!(shadow.r < 0.01);
        assert_eq!(r.pixel(20, 9), Some(Color::WHITE));
    }

    #[test]
    fn rotation_moves_geometry_until_restore() {
        let mut r = Raster::new(40, 40);
        let stroke = Stroke::new(2.0, Color::WHITE);
        r.save();
        r.rotate(90.0, Vec2::new(20.0, 20.0));
        // top tick, rotated to the right side
        r.stroke_line(Vec2::new(20.0, 2.0), Vec2::new(20.0, 8.0), &stroke);
        r.restore();

        assert!(opaque(r.pixel(34, 19)));
        assert_eq!(r.pixel(19, 4), Some(Color::TRANSPARENT));
    }

    #[test]
    fn degenerate_shapes_draw_nothing() {
        let mut r = Raster::new(10, 10);
        r.fill_circle(Vec2::new(5.0, 5.0), -3.0, Color::RED);
        r.stroke_circle(Vec2::new(5.0, 5.0), 0.0, &Stroke::new(5.0, Color::RED));
        r.stroke_line(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), &Stroke::new(5.0, Color::RED));
        assert!(r.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn text_without_typeface_is_skipped() {
        let mut r = Raster::new(10, 10);
        assert!(!r.supports_text());
        assert!(r.text_bounds("12", 8.0).is_empty());
        r.draw_text("12", Vec2::new(1.0, 9.0), 8.0, Color::WHITE);
        assert!(r.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn draw_raster_composites_at_origin() {
        let mut layer = Raster::new(2, 2);
        layer.fill(Color::RED);
        let mut target = Raster::new(6, 6);
        target.fill(Color::WHITE);
        target.draw_raster(&layer, Vec2::new(3.0, 1.0));

        assert_eq!(target.pixel(3, 1), Some(Color::RED));
        assert_eq!(target.pixel(4, 2), Some(Color::RED));
        assert_eq!(target.pixel(2, 1), Some(Color::WHITE));
    }

    #[test]
    fn transparent_pixels_do_not_overwrite() {
        let layer = Raster::new(3, 3);
        let mut target = Raster::new(3, 3);
        target.fill(Color::WHITE);
        target.draw_raster(&layer, Vec2::zero());
        assert_eq!(target.pixel(1, 1), Some(Color::WHITE));
    }
}
