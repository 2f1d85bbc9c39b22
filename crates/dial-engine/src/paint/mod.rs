//! Paint model shared between the clock core and canvases.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - stroke description (width, color, optional drop shadow)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod stroke;

pub use color::{Color, ColorParseError};
pub use stroke::{Shadow, Stroke};
