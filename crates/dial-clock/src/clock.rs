//! The clock facade driven by the host's UI context.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

use dial_engine::canvas::Surface;
use dial_engine::coords::Vec2;
use dial_engine::raster::Raster;
use parking_lot::Mutex;

use crate::config::ClockConfig;
use crate::face;
use crate::hands;
use crate::sizing::{Dimensions, SizeHint, negotiate};
use crate::state::{ClockState, FrameState, SharedState};
use crate::ticker::{REFRESH_INTERVAL, RedrawRequest, Ticker, TickerContext, TimeSources};

/// An analog clock with a bouncing second hand.
///
/// All methods belong to the host's UI context. While shown, a background
/// ticker sends [`RedrawRequest`]s through the channel given to [`Clock::new`];
/// the host answers each with [`on_redraw_request`](Self::on_redraw_request)
/// and repaints when that returns `true`.
pub struct Clock {
    config: ClockConfig,
    dims: Option<Dimensions>,
    /// Static face for `dims`, built on the first draw.
    face: Option<Raster>,
    state: SharedState,
    sources: TimeSources,
    redraw: Sender<RedrawRequest>,
    ticker: Option<Ticker>,
    refresh_interval: Duration,
}

impl Clock {
    pub fn new(config: ClockConfig, sources: TimeSources, redraw: Sender<RedrawRequest>) -> Self {
        Self {
            config,
            dims: None,
            face: None,
            state: Arc::new(Mutex::new(ClockState::new())),
            sources,
            redraw,
            ticker: None,
            refresh_interval: REFRESH_INTERVAL,
        }
    }

    /// Overrides the ticker sleep. Takes effect on the next show.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[inline]
    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dims.as_ref()
    }

    /// Size of the cached face, if one has been built.
    pub fn face_size(&self) -> Option<(u32, u32)> {
        self.face.as_ref().map(|f| (f.width(), f.height()))
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Point-in-time copy of the hand state.
    pub fn frame(&self) -> FrameState {
        self.state.lock().frame()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Negotiates a square size from the host's hints and applies it.
    pub fn on_measure(&mut self, width: SizeHint, height: SizeHint, suggested_minimum: u32) -> (u32, u32) {
        let (w, h) = negotiate(width, height, suggested_minimum);
        self.on_size(w, h);
        (w, h)
    }

    pub fn on_size(&mut self, width: u32, height: u32) {
        let dims = Dimensions::new(width, height);
        if self.dims == Some(dims) {
            return;
        }
        log::debug!("resized to {width}x{height} (radius {})", dims.radius);
        self.dims = Some(dims);
        self.face = None;
    }

    /// Resets the hand state to the current time and starts the ticker.
    ///
    /// The hands are drawn at rest until the next second rollover.
    pub fn on_show(&mut self) {
        self.stop_ticker();

        let civil = self.sources.civil.now();
        {
            let mut state = self.state.lock();
            state.reset();
            if let Some(civil) = civil {
                state.observe(civil);
            }
        }

        let ctx = TickerContext {
            state: Arc::clone(&self.state),
            sources: self.sources.clone(),
            redraw: self.redraw.clone(),
        };
        match Ticker::spawn(ctx, self.refresh_interval) {
            Ok(ticker) => self.ticker = Some(ticker),
            Err(err) => log::error!("failed to start ticker: {err}"),
        }
    }

    pub fn on_hide(&mut self) {
        self.stop_ticker();
    }

    pub fn on_detach(&mut self) {
        self.stop_ticker();
        self.face = None;
    }

    /// UI-side half of a [`RedrawRequest`]: advances the animation from the
    /// monotonic clock.
    ///
    /// Returns `true` while the tick was still animating, meaning the host
    /// should invalidate and call [`draw`](Self::draw).
    pub fn on_redraw_request(&mut self) -> bool {
        let now = self.sources.monotonic.now_millis();
        self.state.lock().animation_mut().advance(now)
    }

    /// Paints the cached face followed by the hands.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let Some(dims) = self.dims else {
            log::trace!("draw before size; skipped");
            return;
        };
        if dims.is_degenerate() {
            log::trace!("draw skipped: degenerate {}x{}", dims.width, dims.height);
            return;
        }

        let frame = self.frame();
        let config = &self.config;
        let face = self.face.get_or_insert_with(|| build_face(&dims, config));

        surface.draw_raster(face, Vec2::zero());
        hands::render(surface, &dims, &frame);
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

fn build_face(dims: &Dimensions, config: &ClockConfig) -> Raster {
    let mut raster = Raster::new(dims.width, dims.height).with_typeface(config.font().cloned());
    face::render(&mut raster, dims, config);
    log::debug!("face cache built at {}x{}", dims.width, dims.height);
    raster
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Receiver};

    use dial_engine::canvas::{CanvasOp, RecordingCanvas};
    use dial_engine::time::{CivilTime, ManualCivil, ManualMonotonic};

    use crate::easing::bounce;

    struct Harness {
        clock: Clock,
        rx: Receiver<RedrawRequest>,
        civil: Arc<ManualCivil>,
        mono: Arc<ManualMonotonic>,
    }

    fn harness(time: CivilTime) -> Harness {
        let (tx, rx) = mpsc::channel();
        let civil = Arc::new(ManualCivil::new(time));
        let mono = Arc::new(ManualMonotonic::new(10_000));
        let sources = TimeSources::new(mono.clone(), civil.clone());
        let clock = Clock::new(ClockConfig::new(), sources, tx)
            .with_refresh_interval(Duration::from_millis(2));
        Harness { clock, rx, civil, mono }
    }

    const WAIT: Duration = Duration::from_secs(2);

    #[test]
    fn draw_before_size_paints_nothing() {
        let mut h = harness(CivilTime::new(12, 0, 0));
        let mut canvas = RecordingCanvas::new();
        h.clock.draw(&mut canvas);
        assert!(canvas.ops().is_empty());
        assert_eq!(h.clock.face_size(), None);
    }

    #[test]
    fn degenerate_size_paints_nothing() {
        let mut h = harness(CivilTime::new(12, 0, 0));
        h.clock.on_size(8, 8);
        let mut canvas = RecordingCanvas::new();
        h.clock.draw(&mut canvas);
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn draw_blits_face_then_strokes_hands() {
        let mut h = harness(CivilTime::new(12, 0, 0));
        h.clock.on_size(200, 200);
        let mut canvas = RecordingCanvas::new();
        h.clock.draw(&mut canvas);

        let ops = canvas.ops();
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0], CanvasOp::Image { origin: Vec2::zero(), width: 200, height: 200 });
        assert!(ops[1..].iter().all(|op| matches!(op, CanvasOp::Line { .. })));
        assert_eq!(h.clock.face_size(), Some((200, 200)));
    }

    #[test]
    fn face_cache_follows_size() {
        let mut h = harness(CivilTime::new(12, 0, 0));
        let mut canvas = RecordingCanvas::new();

        h.clock.on_size(120, 100);
        h.clock.draw(&mut canvas);
        assert_eq!(h.clock.face_size(), Some((120, 100)));

        h.clock.on_size(120, 100);
        assert_eq!(h.clock.face_size(), Some((120, 100)));

        h.clock.on_size(300, 300);
        assert_eq!(h.clock.face_size(), None);
        h.clock.draw(&mut canvas);
        assert_eq!(h.clock.face_size(), Some((300, 300)));

        h.clock.on_detach();
        assert_eq!(h.clock.face_size(), None);
    }

    #[test]
    fn on_measure_applies_negotiated_size() {
        let mut h = harness(CivilTime::new(12, 0, 0));
        let size = h.clock.on_measure(SizeHint::exact(400), SizeHint::at_most(800), 0);
        assert_eq!(size, (400, 400));
        assert_eq!(h.clock.dimensions().map(|d| d.radius), Some(195));
    }

    #[test]
    fn show_draws_current_time_at_rest() {
        let mut h = harness(CivilTime::new(3, 15, 30));
        h.clock.on_show();

        let frame = h.clock.frame();
        assert_eq!(frame.time.second, 30);
        assert_eq!(frame.position, 1.0);

        // the pending settle is the only animation step until the next second
        assert!(h.clock.on_redraw_request());
        assert!(!h.clock.on_redraw_request());
        assert_eq!(h.clock.frame().position, 1.0);

        h.clock.on_hide();
    }

    #[test]
    fn rollover_animates_second_hand() {
        let mut h = harness(CivilTime::new(10, 0, 5));
        h.clock.on_show();
        assert_eq!(h.rx.recv_timeout(WAIT), Ok(RedrawRequest));
        h.clock.on_redraw_request();
        while h.rx.try_recv().is_ok() {}

        h.civil.set(CivilTime::new(10, 0, 6));
        // a request from before the rollover may still be in the channel
        while h.clock.frame().time.second != 6 {
            assert_eq!(h.rx.recv_timeout(WAIT), Ok(RedrawRequest));
        }
        assert_eq!(h.clock.frame().position, 0.0);

        h.mono.advance(125);
        assert!(h.clock.on_redraw_request());
        assert_eq!(h.clock.frame().position, bounce(0.5));

        h.mono.advance(125);
        assert!(h.clock.on_redraw_request());
        assert_eq!(h.clock.frame().position, 1.0);
        assert!(!h.clock.on_redraw_request());

        h.clock.on_hide();
    }

    #[test]
    fn hide_and_show_toggle_ticker() {
        let mut h = harness(CivilTime::new(1, 2, 3));
        assert!(!h.clock.is_ticking());
        h.clock.on_show();
        assert!(h.clock.is_ticking());
        h.clock.on_show();
        assert!(h.clock.is_ticking());
        h.clock.on_hide();
        assert!(!h.clock.is_ticking());
        h.clock.on_hide();
        assert!(!h.clock.is_ticking());
    }

    #[test]
    fn show_without_civil_time_keeps_drawing() {
        let mut h = harness(CivilTime::new(1, 2, 3));
        h.civil.clear();
        h.clock.on_size(100, 100);
        h.clock.on_show();
        assert_eq!(h.clock.frame().time.second, 0);

        let mut canvas = RecordingCanvas::new();
        h.clock.draw(&mut canvas);
        assert_eq!(canvas.lines().count(), 3);
        h.clock.on_hide();
    }
}
