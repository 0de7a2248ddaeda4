//! Clock reading → record projection.

use chrono::Timelike;

use crate::types::ClockTime;

/// Project a clock reading down to its hour/minute/second fields.
///
/// Accepts anything [`Timelike`] so the scheduler can feed a
/// `DateTime<Local>` while tests feed `NaiveTime` literals.
pub fn serialize(now: impl Timelike) -> ClockTime {
    ClockTime {
        hours: now.hour() as u8,
        minutes: now.minute() as u8,
        seconds: now.second() as u8,
    }
}
