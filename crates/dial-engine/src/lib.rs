//! Dial engine crate.
//!
//! This crate owns the host-facing pieces used by the clock core: geometry
//! types, paints, the `Canvas`/`Surface` drawing traits, a software raster,
//! text rasterization and time sources.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod text;
pub mod time;
