//! Static clock face: disc, ring, hour ticks and numerals.
//!
//! The face does not change between ticks, so the clock paints it once per
//! size into an offscreen raster and composites that on every frame.

use dial_engine::canvas::Canvas;
use dial_engine::coords::{Point, Vec2};
use dial_engine::paint::{Color, Stroke};

use crate::config::ClockConfig;
use crate::geometry::{point, scaled};
use crate::sizing::Dimensions;

const HOURS: usize = 12;
const DEGREES_PER_HOUR: f32 = 30.0;

const TICK_LENGTH: f64 = 0.05;
const NUMERAL_RADIUS: f64 = 0.8;
const NUMERAL_SIZE: f64 = 0.2;

const RING_COLOR: Color = Color::WHITE;
const NUMERAL_COLOR: Color = Color::WHITE;

/// Paints the face for `dims` into `canvas`.
///
/// Nothing is drawn for degenerate dimensions. Numerals are skipped, with a
/// warning, when the canvas cannot render text.
pub fn render(canvas: &mut dyn Canvas, dims: &Dimensions, config: &ClockConfig) {
    if dims.is_degenerate() {
        log::debug!("face skipped: radius {} for {}x{}", dims.radius, dims.width, dims.height);
        return;
    }

    draw_disc(canvas, dims, config.face());
    draw_ticks(canvas, dims);

    if canvas.supports_text() {
        draw_numerals(canvas, dims, config);
    } else {
        log::warn!("face numerals skipped: canvas has no typeface");
    }
}

fn ring_stroke(dims: &Dimensions) -> Stroke {
    Stroke::new(dims.stroke_width as f32, RING_COLOR)
}

fn draw_disc(canvas: &mut dyn Canvas, dims: &Dimensions, fill: Color) {
    let center = Vec2::from(dims.center);
    let radius = dims.radius as f32;
    canvas.fill_circle(center, radius, fill);
    canvas.stroke_circle(center, radius, &ring_stroke(dims));
}

/// One short radial mark per hour, drawn at twelve and rotated into place.
fn draw_ticks(canvas: &mut dyn Canvas, dims: &Dimensions) {
    let Point { x: cx, y: cy } = dims.center;
    let top = cy - dims.radius;
    let inner = top + scaled(dims.radius, TICK_LENGTH);
    let stroke = ring_stroke(dims);
    let pivot = Vec2::from(dims.center);

    canvas.save();
    for _ in 0..HOURS {
        canvas.stroke_line(
            Vec2::from(Point::new(cx, top)),
            Vec2::from(Point::new(cx, inner)),
            &stroke,
        );
        canvas.rotate(DEGREES_PER_HOUR, pivot);
    }
    canvas.restore();
}

/// Labels are centered on their anchor using the measured ink box.
fn draw_numerals(canvas: &mut dyn Canvas, dims: &Dimensions, config: &ClockConfig) {
    let text_radius = scaled(dims.radius, NUMERAL_RADIUS);
    let size = scaled(dims.radius, NUMERAL_SIZE) as f32;

    for i in 0..HOURS {
        let anchor = point((i * 5) as f32, text_radius, dims.center);
        let label = config.numeral_style().label(i);
        let bounds = canvas.text_bounds(&label, size);
        let origin = Point::new(
            anchor.x - bounds.width() / 2,
            anchor.y + bounds.height() / 2,
        );
        canvas.draw_text(&label, Vec2::from(origin), size, NUMERAL_COLOR);
    }
}
