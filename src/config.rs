//! Clock configuration.
//!
//! Two recognized options: the display template and the tick interval.
//! The defaults reproduce the reference clock, one `hh:mm:ss tt` frame per
//! second.

use std::time::Duration;

use crate::pipeline::Template;

/// Tick period of the reference clock.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Configuration for a [`Ticker`](crate::ticker::Ticker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Display pattern holding the `hh`/`mm`/`ss`/`tt` placeholders.
    pub template: Template,
    /// Tick period. Must be non-zero.
    pub interval: Duration,
}

impl ClockConfig {
    /// Replace the display template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Replace the tick interval.
    ///
    /// # Panics
    ///
    /// Panics on a zero interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "tick interval must be non-zero");
        self.interval = interval;
        self
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            template: Template::default(),
            interval: DEFAULT_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_clock() {
        let config = ClockConfig::default();
        assert_eq!(config.template.pattern(), "hh:mm:ss tt");
        assert_eq!(config.interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_with_setters() {
        let config = ClockConfig::default()
            .with_template(Template::new("hh:mm"))
            .with_interval(Duration::from_millis(250));
        assert_eq!(config.template.pattern(), "hh:mm");
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_interval_is_rejected() {
        let _ = ClockConfig::default().with_interval(Duration::ZERO);
    }
}
