// EntryDecoder - entry -> 9 glyphs -> 9 digit outcomes -> AccountNumber

use crate::account::{AccountNumber, DigitOutcome};
use crate::config::OcrConfig;
use crate::digits::match_glyph;
use crate::entry::{extract, Entry, DIGITS_PER_ENTRY, ENTRY_WIDTH};
use crate::error::{OcrError, Result};
use tracing::{debug, trace, warn};

/// Decode one entry with default settings
pub fn decode(entry: &Entry) -> Result<AccountNumber> {
    EntryDecoder::default().decode(entry)
}

#[derive(Debug, Clone, Default)]
pub struct EntryDecoder {
    config: OcrConfig,
}

impl EntryDecoder {
    pub fn new(config: OcrConfig) -> Self {
        EntryDecoder { config }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    /// Decode the 9 digits of `entry`, left to right
    ///
    /// An unreadable digit is kept as `Unrecognized` and decoding carries on.
    /// An invalid character anywhere fails the whole entry.
    pub fn decode(&self, entry: &Entry) -> Result<AccountNumber> {
        if self.config.strict_width {
            check_width(entry)?;
        }

        let mut digits = [DigitOutcome::Unrecognized; DIGITS_PER_ENTRY];
        for (index, slot) in digits.iter_mut().enumerate() {
            let glyph = extract(entry, index)?;
            *slot = match_glyph(&glyph);
            trace!(index, outcome = ?slot, "matched glyph");
        }

        let account = AccountNumber::new(digits);
        let rendered = account.render(self.config.placeholder);

        if account.is_legible() {
            debug!(account = %rendered, "decoded entry");
        } else {
            warn!(
                account = %rendered,
                positions = ?account.unrecognized_positions(),
                "entry has unreadable digits"
            );
        }

        Ok(account)
    }

    /// Parse `text` as a single entry and decode it
    pub fn decode_text(&self, text: &str) -> Result<AccountNumber> {
        let entry = Entry::from_text(text)?;
        self.decode(&entry)
    }

    /// Decode independent entries in order; one bad entry does not stop the rest
    pub fn decode_all(&self, entries: &[Entry]) -> Vec<Result<AccountNumber>> {
        entries.iter().map(|entry| self.decode(entry)).collect()
    }
}

fn check_width(entry: &Entry) -> Result<()> {
    for (row, line) in entry.rows().iter().enumerate() {
        let len = line.chars().count();
        if len != ENTRY_WIDTH {
            return Err(OcrError::WrongRowWidth { row, len });
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
