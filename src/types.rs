//! Core record types for the clock pipeline.
//!
//! Each stage of the pipeline produces a NEW value of a distinct type:
//! a 24-hour [`ClockTime`] becomes a 12-hour [`CivilTime`] with its
//! [`Meridiem`], which becomes a [`PaddedTime`] with two-digit textual
//! fields. Because every stage owns a fresh value, a later stage can never
//! observe a partially-converted record.

use std::fmt;

// =============================================================================
// Meridiem
// =============================================================================

/// AM/PM marker for civilian (12-hour) time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// First half of the day: hours 0-11 on the 24-hour clock.
    Am,
    /// Second half of the day: hours 12-23 on the 24-hour clock.
    Pm,
}

impl Meridiem {
    /// Display form used by the formatter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Pipeline records
// =============================================================================

/// A clock reading projected down to its 24-hour time-of-day fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl ClockTime {
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

/// A clock reading remapped to 12-hour form with its meridiem attached.
///
/// `hours` is 1-12 for most of the day; midnight keeps hour 0 (see
/// [`to_civilian`](crate::pipeline::to_civilian)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub meridiem: Meridiem,
}

/// Civilian time with every numeric field rendered as two-digit text.
///
/// From this stage on the fields are display strings, ready for template
/// substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedTime {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub meridiem: Meridiem,
}

// =============================================================================
// Tests
// =============================================================================
