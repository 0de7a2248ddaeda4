//! Error types.

use thiserror::Error;

/// Errors surfaced by a clock run.
///
/// Sink write failures are deliberately NOT represented here: they are
/// non-fatal, stay `io::Error` at the [`Sink`](crate::renderer::Sink) seam,
/// and the scheduler logs them and keeps ticking.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The host clock could not be read.
    ///
    /// Fatal: the run halts rather than emit a partial or garbled frame.
    #[error("host clock unavailable: {reason}")]
    ClockUnavailable { reason: String },
}
