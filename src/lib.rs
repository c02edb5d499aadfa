// Bank OCR - Core Library
// Reads account numbers drawn with pipes and underscores by a scanning machine

pub mod error;
pub mod glyph;          // 3x3 glyphs + alphabet validation
pub mod entry;          // 3-line entries + glyph extraction
pub mod digits;         // canonical digit table + matching
pub mod account;        // decoded account numbers
pub mod decoder;        // entry -> account number
pub mod config;
pub mod report;         // text / JSON / CSV output

// Re-export commonly used types
pub use error::{OcrError, Result};
pub use glyph::{Glyph, validate, is_allowed, ALLOWED_CHARS, GLYPH_WIDTH, GLYPH_HEIGHT};
pub use entry::{Entry, extract, DIGITS_PER_ENTRY, ENTRY_WIDTH, ENTRY_HEIGHT};
pub use digits::{DIGIT_GLYPHS, canonical_glyph, match_glyph};
pub use account::{AccountNumber, DigitOutcome, EntryStatus, DEFAULT_PLACEHOLDER};
pub use decoder::{EntryDecoder, decode};
pub use config::OcrConfig;
pub use report::{DecodedEntry, OutputFormat, render};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
