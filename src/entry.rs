// Entry - one scanned account number, 3 lines of 27 characters
// GlyphExtractor: cuts an entry into its 9 glyphs

use crate::error::{OcrError, Result};
use crate::glyph::{self, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

pub const DIGITS_PER_ENTRY: usize = 9;
pub const ENTRY_HEIGHT: usize = GLYPH_HEIGHT;
pub const ENTRY_WIDTH: usize = DIGITS_PER_ENTRY * GLYPH_WIDTH;

// ============================================================================
// ENTRY
// ============================================================================

/// Entry - raw display rows as produced by the scanning machine
///
/// Row width is not checked here; [`extract`] reports rows that end early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    rows: [String; ENTRY_HEIGHT],
}

impl Entry {
    pub fn new(rows: [String; ENTRY_HEIGHT]) -> Self {
        Entry { rows }
    }

    /// Build from exactly 3 lines
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        if lines.len() != ENTRY_HEIGHT {
            return Err(OcrError::WrongLineCount(lines.len()));
        }

        Ok(Entry::new([
            lines[0].as_ref().to_string(),
            lines[1].as_ref().to_string(),
            lines[2].as_ref().to_string(),
        ]))
    }

    /// Build from a block of text
    ///
    /// Strips `\r` line endings. A final newline and one blank separator
    /// line after the entry are ignored.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        // "a\nb\n" splits into 3 pieces, the last one empty
        if text.ends_with('\n') {
            lines.pop();
        }
        if lines.len() > ENTRY_HEIGHT && lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        Entry::from_lines(&lines)
    }

    pub fn rows(&self) -> &[String; ENTRY_HEIGHT] {
        &self.rows
    }

    pub fn row(&self, r: usize) -> &str {
        &self.rows[r]
    }
}

// ============================================================================
// GLYPH EXTRACTOR
// ============================================================================

/// Cut out the glyph for digit `index` (0-8) and validate its characters
///
/// Each row contributes the characters at `[3 * index, 3 * index + 3)`.
/// Columns are counted in chars, so a stray multi-byte character is
/// reported as an invalid glyph instead of splitting a code point.
pub fn extract(entry: &Entry, index: usize) -> Result<Glyph> {
    if index >= DIGITS_PER_ENTRY {
        return Err(OcrError::IndexOutOfRange(index));
    }

    let start = index * GLYPH_WIDTH;
    let mut cells = [[' '; GLYPH_WIDTH]; GLYPH_HEIGHT];

    for (r, row) in entry.rows.iter().enumerate() {
        let mut slice = row.chars().skip(start);
        for cell in cells[r].iter_mut() {
            *cell = slice
                .next()
                .ok_or(OcrError::RowTooShort { row: r, index })?;
        }
    }

    glyph::validate(Glyph::from_cells(cells))
}

// ============================================================================
// TESTS
// ============================================================================
