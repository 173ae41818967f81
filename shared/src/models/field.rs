//! Field input filtering
//!
//! Text fields are controlled inputs: every edit proposes a complete new
//! buffer, which the field's [`FieldFilter`] either accepts verbatim or
//! rejects, leaving the previous buffer in place.

use serde::{Deserialize, Serialize};

/// Character set a text field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFilter {
    /// Any text
    Free,
    /// ASCII digits plus `.` and `,`
    Decimal,
    /// ASCII digits only
    Digits,
}

/// Result of proposing a new buffer to a filtered field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    /// The proposed text satisfies the filter and becomes the new buffer
    Accepted(String),
    /// The proposed text contains a disallowed character; keep the old buffer
    Rejected,
}

impl FieldFilter {
    /// Whether a single character is allowed
    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            FieldFilter::Free => true,
            FieldFilter::Decimal => c.is_ascii_digit() || c == '.' || c == ',',
            FieldFilter::Digits => c.is_ascii_digit(),
        }
    }

    /// Whether every character of `text` is allowed (the empty string always is)
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().all(|c| self.accepts_char(c))
    }

    /// Evaluate a proposed buffer
    pub fn apply<S: Into<String>>(&self, proposed: S) -> InputChange {
        let proposed = proposed.into();
        if self.accepts(&proposed) {
            InputChange::Accepted(proposed)
        } else {
            InputChange::Rejected
        }
    }
}

impl InputChange {
    /// Write an accepted change into `buffer`; returns whether the buffer changed
    pub fn apply_to(self, buffer: &mut String) -> bool {
        match self {
            InputChange::Accepted(text) => {
                let changed = *buffer != text;
                *buffer = text;
                changed
            }
            InputChange::Rejected => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_filter() {
        assert!(FieldFilter::Decimal.accepts("12,50"));
        assert!(FieldFilter::Decimal.accepts("12.50"));
        assert!(FieldFilter::Decimal.accepts("1.2,3."));
        assert!(FieldFilter::Decimal.accepts(""));
        assert!(!FieldFilter::Decimal.accepts("12a"));
        assert!(!FieldFilter::Decimal.accepts("-1"));
        assert!(!FieldFilter::Decimal.accepts("1 000"));
    }

    #[test]
    fn test_digits_filter() {
        assert!(FieldFilter::Digits.accepts("0123456789"));
        assert!(!FieldFilter::Digits.accepts("10.5"));
        assert!(!FieldFilter::Digits.accepts("1,0"));
        assert!(!FieldFilter::Digits.accepts("x"));
        // Non-ASCII digits are not part of the accepted set
        assert!(!FieldFilter::Digits.accepts("١٢"));
    }

    #[test]
    fn test_free_filter_accepts_anything() {
        assert!(FieldFilter::Free.accepts("Caneta azul 0,7mm!"));
    }

    #[test]
    fn test_apply_rejected_leaves_buffer() {
        let mut buffer = "10".to_string();
        let changed = FieldFilter::Digits.apply("10a").apply_to(&mut buffer);
        assert!(!changed);
        assert_eq!(buffer, "10");
    }

    #[test]
    fn test_apply_accepted_replaces_buffer() {
        let mut buffer = "1".to_string();
        let changed = FieldFilter::Decimal.apply("1,5").apply_to(&mut buffer);
        assert!(changed);
        assert_eq!(buffer, "1,5");

        // Deleting everything is always allowed
        assert_eq!(FieldFilter::Digits.apply(""), InputChange::Accepted(String::new()));
    }
}
