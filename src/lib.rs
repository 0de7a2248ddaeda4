//! # tick-clock
//!
//! Composable ticking clock for the terminal.
//!
//! One timer thread re-runs a chain of pure transformations once per tick
//! and hands the rendered line to a sink that rewrites it in place:
//!
//! ```text
//! TimeSource → serialize → to_civilian → pad_fields → Template::render → Sink
//! ```
//!
//! Each stage consumes the previous stage's output and returns a fresh
//! value of a distinct type, so no stage can observe partially-converted
//! state. Reading the host clock is the chain's only side effect besides
//! the final write, and it sits behind the [`TimeSource`] seam, so the
//! whole pipeline runs against literal times in tests.
//!
//! ## Example
//!
//! ```no_run
//! use tick_clock::{ClockConfig, ConsoleSink, SystemClock, Ticker};
//!
//! let ticker = Ticker::new(
//!     ClockConfig::default(),
//!     SystemClock::new(),
//!     ConsoleSink::stdout(),
//! );
//! let mut handle = ticker.start();
//! std::thread::sleep(std::time::Duration::from_secs(3));
//! handle.stop().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Pipeline records (ClockTime, CivilTime, PaddedTime, Meridiem)
//! - [`compose`] - Left-to-right function composition
//! - [`time`] - Time sources (system clock, fixed test clock)
//! - [`pipeline`] - The pure transformation stages
//! - [`renderer`] - Output sinks (terminal line rewriter, in-memory recorder)
//! - [`ticker`] - The tick scheduler

pub mod compose;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod renderer;
pub mod ticker;
pub mod time;
pub mod types;

// Re-export commonly used items
pub use compose::compose;

pub use config::{ClockConfig, DEFAULT_INTERVAL};

pub use error::ClockError;

pub use pipeline::{pad_fields, render_line, serialize, to_civilian, two_digit, Template};

pub use renderer::{ConsoleSink, MemorySink, Sink};

pub use ticker::{Ticker, TickerHandle};

pub use time::{FixedClock, SystemClock, TimeSource};

pub use types::{CivilTime, ClockTime, Meridiem, PaddedTime};
