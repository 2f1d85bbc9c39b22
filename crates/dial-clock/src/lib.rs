//! Analog clock with a bounce-animated second hand.
//!
//! The host owns the drawing surface, the event loop and the time services;
//! this crate owns the geometry, the tick animation and the paint order.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::mpsc;
//! use dial_clock::prelude::*;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut clock = Clock::new(ClockConfig::new().numerals(NumeralStyle::Roman), TimeSources::system(), tx);
//!
//! clock.on_size(300, 300);
//! clock.on_show();
//!
//! // In the host event loop:
//! while rx.recv().is_ok() {
//!     if clock.on_redraw_request() {
//!         clock.draw(&mut surface);
//!     }
//! }
//! ```

pub mod animation;
pub mod clock;
pub mod config;
pub mod easing;
pub mod face;
pub mod geometry;
pub mod hands;
pub mod sizing;
pub mod state;
pub mod ticker;

pub use clock::Clock;
pub use config::{ClockConfig, NumeralStyle};
pub use ticker::{RedrawRequest, TimeSources};

/// Everything a host needs to embed a clock.
pub mod prelude {
    pub use crate::clock::Clock;
    pub use crate::config::{ClockConfig, NumeralStyle};
    pub use crate::sizing::{Dimensions, SizeHint, SizeMode};
    pub use crate::state::FrameState;
    pub use crate::ticker::{REFRESH_INTERVAL, RedrawRequest, TimeSources};
    pub use dial_engine::canvas::{Canvas, Surface};
    pub use dial_engine::paint::Color;
    pub use dial_engine::raster::Raster;
    pub use dial_engine::text::Typeface;
}
