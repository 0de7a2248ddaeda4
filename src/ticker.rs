//! Tick scheduler.
//!
//! A [`Ticker`] owns a time source, a sink and a config. Starting it spawns
//! one timer thread that re-runs the composed pipeline once per interval:
//!
//! ```text
//! source.now() → serialize → to_civilian → pad_fields → Template::render → sink
//! ```
//!
//! The lifecycle is Idle (constructed) → Running (started) → Stopped. A
//! stopped ticker cannot be restarted; build a new one. Stopping is
//! idempotent and takes effect immediately: the timer thread waits on a
//! condvar deadline rather than a plain sleep, so [`TickerHandle::stop`]
//! wakes it instead of waiting out the pending interval.
//!
//! Deadlines accumulate as `start + k*interval`, so pipeline latency does
//! not stretch the period. Ticks are not aligned to wall-clock second
//! boundaries.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{trace, warn};
use parking_lot::{Condvar, Mutex};

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::pipeline::{pad_fields, serialize, to_civilian};
use crate::renderer::Sink;
use crate::time::TimeSource;

// =============================================================================
// Stop signal
// =============================================================================

/// Shared between the handle and the timer thread.
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            stopped: Mutex::new(false),
            wake: Condvar::new(),
        }
    }

    fn raise(&self) {
        *self.stopped.lock() = true;
        self.wake.notify_all();
    }
}

// =============================================================================
// Ticker
// =============================================================================

/// An idle clock: configured, nothing scheduled yet.
pub struct Ticker<S, K> {
    config: ClockConfig,
    source: S,
    sink: K,
}

impl<S, K> Ticker<S, K>
where
    S: TimeSource + Send + 'static,
    K: Sink + Send + 'static,
{
    /// Build an idle ticker. Nothing runs until [`start`](Self::start).
    pub fn new(config: ClockConfig, source: S, sink: K) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    /// Start ticking.
    ///
    /// Spawns the timer thread and returns the handle that owns it. The
    /// first frame is rendered after one full interval elapses; there is
    /// no immediate initial render. Run the pipeline yourself before
    /// starting if an instant first frame is wanted.
    ///
    /// # Panics
    ///
    /// Panics on a zero interval.
    pub fn start(self) -> TickerHandle {
        assert!(
            !self.config.interval.is_zero(),
            "tick interval must be non-zero"
        );

        let signal = Arc::new(StopSignal::new());
        let thread_signal = signal.clone();
        let Ticker {
            config,
            source,
            mut sink,
        } = self;

        let thread =
            thread::spawn(move || run_loop(config, &source, &mut sink, &thread_signal));

        TickerHandle {
            signal,
            thread: Some(thread),
        }
    }
}

// =============================================================================
// TickerHandle
// =============================================================================

/// Handle to a running clock; owns the timer thread.
pub struct TickerHandle {
    signal: Arc<StopSignal>,
    thread: Option<JoinHandle<Result<(), ClockError>>>,
}

impl TickerHandle {
    /// Whether the timer thread is still ticking.
    ///
    /// Turns false after [`stop`](Self::stop), and on its own after a fatal
    /// clock error ends the run.
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop ticking and release the timer thread.
    ///
    /// Cancels the pending tick immediately; no further frames are written.
    /// Safe to call repeatedly; later calls are no-ops. Returns the fatal
    /// error if the run already ended because the time source failed.
    pub fn stop(&mut self) -> Result<(), ClockError> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        self.signal.raise();
        match thread.join() {
            Ok(result) => result,
            // A panicked timer thread has already reported its payload.
            Err(_) => Ok(()),
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        // Request stop without blocking on the join; the thread exits at
        // its next wake-up.
        self.signal.raise();
    }
}

// =============================================================================
// Timer loop
// =============================================================================

fn run_loop<S, K>(
    config: ClockConfig,
    source: &S,
    sink: &mut K,
    signal: &StopSignal,
) -> Result<(), ClockError>
where
    S: TimeSource,
    K: Sink,
{
    let ClockConfig { template, interval } = config;
    let format = move |t| template.render(&t);
    let render = crate::compose!(serialize, to_civilian, pad_fields, format);

    let mut deadline = Instant::now() + interval;
    loop {
        // Wait for the deadline, or wake early on stop.
        {
            let mut stopped = signal.stopped.lock();
            loop {
                if *stopped {
                    return Ok(());
                }
                if Instant::now() >= deadline {
                    break;
                }
                let _ = signal.wake.wait_until(&mut stopped, deadline);
            }
        }

        let now = source.now()?;
        let line = render(now);
        trace!("tick: {line}");
        if let Err(e) = sink.display(&line) {
            // Non-fatal: try again on the next tick.
            warn!("sink write failed: {e}");
        }

        deadline += interval;
    }
}

// =============================================================================
// Tests
// =============================================================================
