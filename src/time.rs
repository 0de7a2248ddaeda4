//! Time sources.
//!
//! Reading the host clock is the only side effect inside the transformation
//! chain, so it lives behind the [`TimeSource`] trait: the scheduler takes
//! any source, and tests drive the whole chain with literal times through
//! [`FixedClock`].

use chrono::{DateTime, Local};

use crate::error::ClockError;

/// Produces the current clock reading.
pub trait TimeSource {
    /// Read the clock.
    ///
    /// Fails with [`ClockError::ClockUnavailable`] when the host clock
    /// cannot be read; the scheduler treats that as fatal and ends the run.
    fn now(&self) -> Result<DateTime<Local>, ClockError>;
}

/// Reads the ambient system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Result<DateTime<Local>, ClockError> {
        Ok(Local::now())
    }
}

/// Always returns the same literal reading.
///
/// The injectable test double for the scheduler and the pipeline: feed it a
/// fixed time and every tick renders the same frame.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl TimeSource for FixedClock {
    fn now(&self) -> Result<DateTime<Local>, ClockError> {
        Ok(self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_system_clock_reads_time_of_day() {
        let now = SystemClock::new().now().unwrap();
        assert!(now.hour() < 24);
        assert!(now.minute() < 60);
        assert!(now.second() < 60);
    }

    #[test]
    fn test_fixed_clock_returns_its_literal() {
        let literal = Local.with_ymd_and_hms(2026, 1, 15, 13, 0, 0).unwrap();
        let clock = FixedClock(literal);
        assert_eq!(clock.now().unwrap(), literal);
        assert_eq!(clock.now().unwrap(), literal);
    }
}
