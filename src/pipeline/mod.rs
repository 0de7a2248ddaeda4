//! The pure transformation chain.
//!
//! ```text
//! clock reading → serialize → to_civilian → pad_fields → Template::render → String
//! ```
//!
//! Every stage is a pure, total function over the record types in
//! [`types`](crate::types); the only side effects of a tick (the clock read
//! and the final write) live outside this module, in
//! [`time`](crate::time) and [`renderer`](crate::renderer). The scheduler
//! composes the stages once and re-runs the chain on every tick.

pub mod civilian;
pub mod format;
pub mod pad;
pub mod serialize;

pub use civilian::to_civilian;
pub use format::Template;
pub use pad::{pad_fields, two_digit};
pub use serialize::serialize;

use chrono::Timelike;

/// Run the full pure chain against one clock reading.
pub fn render_line(now: impl Timelike, template: &Template) -> String {
    let chain = crate::compose!(serialize, to_civilian, pad_fields);
    template.render(&chain(now))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_early_morning_keeps_midnight_hour() {
        let line = render_line(at(0, 5, 9), &Template::default());
        assert_eq!(line, "00:05:09 AM");
    }

    #[test]
    fn test_afternoon_wraps_to_twelve_hour() {
        let line = render_line(at(13, 0, 0), &Template::default());
        assert_eq!(line, "01:00:00 PM");
    }

    #[test]
    fn test_noon_stays_twelve() {
        let line = render_line(at(12, 30, 45), &Template::default());
        assert_eq!(line, "12:30:45 PM");
    }

    #[test]
    fn test_every_hour_renders_well_formed_line() {
        for h in 0..24 {
            let line = render_line(at(h, 7, 3), &Template::default());
            let bytes = line.as_bytes();

            assert_eq!(line.len(), 11, "line {line:?} for hour {h}");
            for i in [0usize, 1, 3, 4, 6, 7] {
                assert!(bytes[i].is_ascii_digit(), "line {line:?} for hour {h}");
            }
            assert_eq!(bytes[2], b':');
            assert_eq!(bytes[5], b':');
            assert_eq!(bytes[8], b' ');
            assert!(line.ends_with("AM") || line.ends_with("PM"));
        }
    }

    #[test]
    fn test_custom_template() {
        let template = Template::new("tt hh.mm");
        let line = render_line(at(15, 4, 59), &template);
        assert_eq!(line, "PM 03.04");
    }
}
