//! 24-hour → civilian (12-hour) conversion.

use crate::types::{CivilTime, ClockTime, Meridiem};

/// Remap a 24-hour record into 12-hour form and attach its meridiem.
///
/// Both the meridiem and the hour remap are derived from the ORIGINAL hour
/// value, so neither reads a field the other has already rewritten.
///
/// Midnight is left at hour 0 (it renders as "00"), not remapped to 12.
pub fn to_civilian(t: ClockTime) -> CivilTime {
    let meridiem = if t.hours >= 12 {
        Meridiem::Pm
    } else {
        Meridiem::Am
    };
    let hours = if t.hours > 12 { t.hours - 12 } else { t.hours };

    CivilTime {
        hours,
        minutes: t.minutes,
        seconds: t.seconds,
        meridiem,
    }
}

// =============================================================================
// Tests
// =============================================================================
