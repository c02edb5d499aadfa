// AccountNumber - 9 positional digit outcomes read from one entry
// Not a number: leading zeros are significant and positions may be unreadable

use crate::entry::DIGITS_PER_ENTRY;
use serde::{Serialize, Serializer};
use std::fmt;

/// Placeholder printed for an unreadable position
pub const DEFAULT_PLACEHOLDER: char = '?';

// ============================================================================
// DIGIT OUTCOME
// ============================================================================

/// Result of matching one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DigitOutcome {
    /// Digit 0-9
    Digit(u8),
    /// Well-formed glyph that matches no canonical digit
    Unrecognized,
}

impl DigitOutcome {
    pub fn is_recognized(&self) -> bool {
        matches!(self, DigitOutcome::Digit(_))
    }

    pub fn digit(&self) -> Option<u8> {
        match self {
            DigitOutcome::Digit(d) => Some(*d),
            DigitOutcome::Unrecognized => None,
        }
    }

    pub fn to_char(&self, placeholder: char) -> char {
        match self {
            DigitOutcome::Digit(d) => char::from(b'0' + d),
            DigitOutcome::Unrecognized => placeholder,
        }
    }
}

// ============================================================================
// ENTRY STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryStatus {
    /// All 9 digits read
    #[serde(rename = "OK")]
    Ok,
    /// At least one digit unreadable, needs manual review
    #[serde(rename = "ILL")]
    Illegible,
}

impl EntryStatus {
    /// Short marker used in reports
    pub fn code(&self) -> &str {
        match self {
            EntryStatus::Ok => "OK",
            EntryStatus::Illegible => "ILL",
        }
    }
}

// ============================================================================
// ACCOUNT NUMBER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountNumber {
    digits: [DigitOutcome; DIGITS_PER_ENTRY],
}

impl AccountNumber {
    pub fn new(digits: [DigitOutcome; DIGITS_PER_ENTRY]) -> Self {
        AccountNumber { digits }
    }

    pub fn digits(&self) -> &[DigitOutcome; DIGITS_PER_ENTRY] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_legible(&self) -> bool {
        self.digits.iter().all(DigitOutcome::is_recognized)
    }

    /// Zero-based positions that could not be read, left to right
    pub fn unrecognized_positions(&self) -> Vec<usize> {
        self.digits
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.is_recognized())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn status(&self) -> EntryStatus {
        if self.is_legible() {
            EntryStatus::Ok
        } else {
            EntryStatus::Illegible
        }
    }

    /// Digits as text with `placeholder` standing in for unreadable positions
    pub fn render(&self, placeholder: char) -> String {
        self.digits.iter().map(|d| d.to_char(placeholder)).collect()
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PLACEHOLDER))
    }
}

impl Serialize for AccountNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use DigitOutcome::{Digit, Unrecognized};

    fn sequential() -> AccountNumber {
        AccountNumber::new([
            Digit(1), Digit(2), Digit(3), Digit(4), Digit(5),
            Digit(6), Digit(7), Digit(8), Digit(9),
        ])
    }

    #[test]
    fn test_render_all_digits() {
        let account = sequential();
        assert_eq!(account.to_string(), "123456789");
        assert_eq!(account.len(), 9);
        assert!(account.is_legible());
        assert_eq!(account.status(), EntryStatus::Ok);
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        let account = AccountNumber::new([Digit(0); 9]);
        assert_eq!(account.to_string(), "000000000");
    }

    #[test]
    fn test_unrecognized_positions_render_placeholder() {
        let mut digits = *sequential().digits();
        digits[2] = Unrecognized;
        digits[8] = Unrecognized;
        let account = AccountNumber::new(digits);

        assert_eq!(account.to_string(), "12?45678?");
        assert_eq!(account.render('*'), "12*45678*");
        assert_eq!(account.unrecognized_positions(), vec![2, 8]);
        assert_eq!(account.status(), EntryStatus::Illegible);
        assert_eq!(account.status().code(), "ILL");
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Digit(7).digit(), Some(7));
        assert_eq!(Unrecognized.digit(), None);
        assert_eq!(Digit(0).to_char('?'), '0');
        assert_eq!(Unrecognized.to_char('?'), '?');
    }

    #[test]
    fn test_status_serializes_as_code() {
        for status in [EntryStatus::Ok, EntryStatus::Illegible] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&sequential()).unwrap();
        assert_eq!(json, "\"123456789\"");
    }
}
