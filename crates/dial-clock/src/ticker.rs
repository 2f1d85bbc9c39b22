//! Background ticker.
//!
//! One thread per shown clock polls civil time, starts a tick animation on
//! every second rollover and asks the UI context for a repaint while that
//! animation is in flight. The UI context consumes [`RedrawRequest`]s from
//! a channel and calls [`Clock::on_redraw_request`](crate::Clock::on_redraw_request).

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use dial_engine::time::{CivilClock, LocalCivil, MonotonicClock, SystemMonotonic};

use crate::state::SharedState;

/// Target repaint rate while a tick animates.
pub const FRAMES_PER_SECOND: u64 = 32;

/// Sleep between ticker iterations.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND);

/// Message asking the UI context to recompute the animation and repaint.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RedrawRequest;

/// Host time services.
#[derive(Clone)]
pub struct TimeSources {
    pub monotonic: Arc<dyn MonotonicClock>,
    pub civil: Arc<dyn CivilClock>,
}

impl TimeSources {
    pub fn new(monotonic: Arc<dyn MonotonicClock>, civil: Arc<dyn CivilClock>) -> Self {
        Self { monotonic, civil }
    }

    /// `Instant`-based monotonic time and the local time zone.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemMonotonic::new()), Arc::new(LocalCivil))
    }
}

impl Default for TimeSources {
    fn default() -> Self {
        Self::system()
    }
}

/// What the ticker thread works with.
pub struct TickerContext {
    pub state: SharedState,
    pub sources: TimeSources,
    pub redraw: Sender<RedrawRequest>,
}

impl TickerContext {
    /// One poll: detect a rollover and report whether a repaint is due.
    ///
    /// A failed civil read keeps the previous snapshot.
    pub fn step(&self) -> bool {
        let now = self.sources.monotonic.now_millis();
        let civil = self.sources.civil.now();

        let mut state = self.state.lock();
        if civil.is_some_and(|civil| state.observe(civil)) {
            state.animation_mut().restart(now);
        }
        state.animation().in_flight()
    }
}

/// Handle to a running ticker thread.
///
/// Cancelling never blocks: the flag is set and the thread is woken, and it
/// exits on its own at the top of its loop. Dropping the handle cancels.
pub struct Ticker {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(ctx: TickerContext, interval: Duration) -> io::Result<Self> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let handle = thread::Builder::new()
            .name("dial-ticker".into())
            .spawn(move || run(&ctx, &flag, interval))?;

        log::debug!("ticker started ({} ms interval)", interval.as_millis());
        Ok(Self { cancelled, handle: Some(handle) })
    }

    /// Requests the thread to stop. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(handle) = &self.handle {
            // Cut the current sleep short; the wake-up itself carries no meaning.
            handle.thread().unpark();
        }
        log::debug!("ticker cancelled");
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Whether the thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancels and waits for the thread to exit.
    ///
    /// Meant for host shutdown, not for the UI context.
    pub fn join(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run(ctx: &TickerContext, cancelled: &AtomicBool, interval: Duration) {
    while !cancelled.load(Ordering::Acquire) {
        if ctx.step() && !cancelled.load(Ordering::Acquire) {
            log::trace!("redraw requested");
            if ctx.redraw.send(RedrawRequest).is_err() {
                log::debug!("redraw receiver gone; ticker exiting");
                break;
            }
        }
        thread::park_timeout(interval);
    }
}
