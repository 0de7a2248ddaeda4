//! Two-digit field padding.

use crate::types::{CivilTime, PaddedTime};

/// Render a numeric field as two-character text.
///
/// Values below 10 get a leading zero; everything else is its plain decimal
/// form.
pub fn two_digit(v: u8) -> String {
    if v < 10 { format!("0{v}") } else { v.to_string() }
}

/// Pad every numeric field of a civilian record.
///
/// Fields are padded independently; no field's rendering reads another.
pub fn pad_fields(t: CivilTime) -> PaddedTime {
    PaddedTime {
        hours: two_digit(t.hours),
        minutes: two_digit(t.minutes),
        seconds: two_digit(t.seconds),
        meridiem: t.meridiem,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Meridiem;

    #[test]
    fn test_two_digit_is_always_two_chars() {
        for v in 0..60u8 {
            let s = two_digit(v);
            assert_eq!(s.len(), 2, "value {v} rendered as {s:?}");
            if v < 10 {
                assert_eq!(s, format!("0{v}"));
            } else {
                assert_eq!(s, v.to_string());
            }
        }
    }

    #[test]
    fn test_pad_fields_pads_each_field() {
        let padded = pad_fields(CivilTime {
            hours: 1,
            minutes: 30,
            seconds: 5,
            meridiem: Meridiem::Pm,
        });
        assert_eq!(padded.hours, "01");
        assert_eq!(padded.minutes, "30");
        assert_eq!(padded.seconds, "05");
        assert_eq!(padded.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_pad_fields_keeps_midnight_zero() {
        let padded = pad_fields(CivilTime {
            hours: 0,
            minutes: 0,
            seconds: 0,
            meridiem: Meridiem::Am,
        });
        assert_eq!(padded.hours, "00");
    }
}
