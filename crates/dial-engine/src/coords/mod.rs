//! Coordinate and transform types shared by canvases and the clock core.
//!
//! Canonical space:
//! - Surface pixels
//! - Origin top-left
//! - +X right, +Y down (positive rotation is clockwise on screen)

mod point;
mod transform;
mod vec2;

pub use point::Point;
pub use transform::Transform;
pub use vec2::Vec2;
