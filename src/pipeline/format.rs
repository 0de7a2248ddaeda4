//! Display template substitution.

use crate::types::PaddedTime;

/// A display pattern holding the `hh`, `mm`, `ss` and `tt` placeholders.
///
/// Rendering substitutes the FIRST occurrence of each token exactly once.
/// A token absent from the pattern silently drops that field; there is no
/// validation failure for malformed patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: String,
}

impl Template {
    /// The reference clock pattern.
    pub const DEFAULT_PATTERN: &'static str = "hh:mm:ss tt";

    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The raw pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Substitute the padded fields into the pattern.
    ///
    /// Each token is replaced in a single pass. The substituted values are
    /// digits or "AM"/"PM", so a replacement can never introduce another
    /// token, and the order of the four substitutions does not affect the
    /// result.
    pub fn render(&self, t: &PaddedTime) -> String {
        self.pattern
            .replacen("hh", &t.hours, 1)
            .replacen("mm", &t.minutes, 1)
            .replacen("ss", &t.seconds, 1)
            .replacen("tt", t.meridiem.as_str(), 1)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATTERN)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Meridiem;

    fn padded() -> PaddedTime {
        PaddedTime {
            hours: "07".to_string(),
            minutes: "30".to_string(),
            seconds: "09".to_string(),
            meridiem: Meridiem::Am,
        }
    }

    #[test]
    fn test_default_pattern_renders_all_fields() {
        let line = Template::default().render(&padded());
        assert_eq!(line, "07:30:09 AM");
    }

    #[test]
    fn test_absent_token_drops_field() {
        let line = Template::new("hh:mm").render(&padded());
        assert_eq!(line, "07:30");
    }

    #[test]
    fn test_only_first_occurrence_is_substituted() {
        let line = Template::new("hh hh").render(&padded());
        assert_eq!(line, "07 hh");
    }

    #[test]
    fn test_substitution_order_does_not_matter() {
        let t = padded();
        let fields: [(&str, &str); 4] = [
            ("hh", &t.hours),
            ("mm", &t.minutes),
            ("ss", &t.seconds),
            ("tt", t.meridiem.as_str()),
        ];
        let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1], [1, 3, 0, 2]];

        let reference = Template::default().render(&t);
        for order in orders {
            let mut line = Template::DEFAULT_PATTERN.to_string();
            for i in order {
                let (token, value) = fields[i];
                line = line.replacen(token, value, 1);
            }
            assert_eq!(line, reference, "order {order:?}");
        }
    }

    #[test]
    fn test_substituted_values_contain_no_tokens() {
        // Digits and AM/PM can never re-trigger a substitution.
        let t = padded();
        for value in [&t.hours, &t.minutes, &t.seconds] {
            for token in ["hh", "mm", "ss", "tt"] {
                assert!(!value.contains(token));
            }
        }
        for token in ["hh", "mm", "ss", "tt"] {
            assert!(!t.meridiem.as_str().contains(token));
        }
    }

    #[test]
    fn test_pattern_without_tokens_is_untouched() {
        let line = Template::new("--").render(&padded());
        assert_eq!(line, "--");
    }
}
