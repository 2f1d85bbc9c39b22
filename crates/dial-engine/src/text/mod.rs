//! Text measurement and glyph rasterization.
//!
//! Backed by `fontdue`. Measurement reports tight ink bounds relative to the
//! baseline origin so callers can center labels on a point.

mod typeface;

pub use typeface::{FontLoadError, Glyph, TextBounds, Typeface};
