// Error types for the OCR decoder
// Malformed input is an error; an unreadable digit is not (see DigitOutcome)

use crate::glyph::Glyph;
use thiserror::Error;

/// Result type alias using the library's error type.
pub type Result<T> = std::result::Result<T, OcrError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OcrError {
    /// A character outside {' ', '_', '|'} appeared in a 3x3 block
    #[error("invalid character in glyph:\n{glyph}")]
    InvalidGlyphCharacter { glyph: Glyph },

    /// Digit index outside 0..9
    #[error("digit index {0} out of range (entry holds 9 digits)")]
    IndexOutOfRange(usize),

    /// Row ends before the requested digit's columns
    #[error("row {row} is too short to hold digit {index}")]
    RowTooShort { row: usize, index: usize },

    /// Glyph row that is not exactly 3 characters wide
    #[error("glyph row {row} has {len} characters, expected 3")]
    MalformedGlyphRow { row: usize, len: usize },

    /// Entry that is not exactly 3 lines tall
    #[error("entry has {0} lines, expected 3")]
    WrongLineCount(usize),

    /// Strict mode only: row width other than 27
    #[error("row {row} has {len} characters, expected 27")]
    WrongRowWidth { row: usize, len: usize },
}

impl OcrError {
    /// True for the malformed-character failure, as opposed to a geometry problem
    pub fn is_invalid_character(&self) -> bool {
        matches!(self, OcrError::InvalidGlyphCharacter { .. })
    }
}
