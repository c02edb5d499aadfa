// Glyph - one 3x3 digit cell drawn with pipes and underscores
// Validation of the glyph alphabet lives here

use crate::error::{OcrError, Result};
use std::fmt;

// ============================================================================
// GEOMETRY
// ============================================================================

pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 3;

/// Characters a scanner is allowed to emit inside a glyph
pub const ALLOWED_CHARS: [char; 3] = [' ', '_', '|'];

pub fn is_allowed(c: char) -> bool {
    ALLOWED_CHARS.contains(&c)
}

// ============================================================================
// GLYPH
// ============================================================================

/// Glyph - 3 rows of 3 characters each
///
/// Equality is structural: two glyphs cut from different entries compare
/// equal when every row matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    cells: [[char; GLYPH_WIDTH]; GLYPH_HEIGHT],
}

impl Glyph {
    /// Build a glyph from ASCII rows at compile time
    ///
    /// Used for the canonical digit table, which must be a `static`.
    pub const fn from_ascii(rows: [&[u8; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        let mut cells = [[' '; GLYPH_WIDTH]; GLYPH_HEIGHT];
        let mut r = 0;
        while r < GLYPH_HEIGHT {
            let mut c = 0;
            while c < GLYPH_WIDTH {
                cells[r][c] = rows[r][c] as char;
                c += 1;
            }
            r += 1;
        }
        Glyph { cells }
    }

    /// Build a glyph from row strings
    ///
    /// Checks shape only. The alphabet is checked by [`validate`].
    pub fn from_rows(rows: &[&str; GLYPH_HEIGHT]) -> Result<Self> {
        let mut cells = [[' '; GLYPH_WIDTH]; GLYPH_HEIGHT];

        for (r, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != GLYPH_WIDTH {
                return Err(OcrError::MalformedGlyphRow { row: r, len });
            }
            for (c, ch) in row.chars().enumerate() {
                cells[r][c] = ch;
            }
        }

        Ok(Glyph { cells })
    }

    pub(crate) fn from_cells(cells: [[char; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        Glyph { cells }
    }

    /// Row `r` as a string, `None` past the last row
    pub fn row(&self, r: usize) -> Option<String> {
        self.cells.get(r).map(|row| row.iter().collect())
    }

    pub fn rows(&self) -> [String; GLYPH_HEIGHT] {
        self.cells.map(|row| row.iter().collect())
    }

    /// Every character of every row, top to bottom, left to right
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Reject a glyph holding any character outside the alphabet
///
/// Stops at the first offending character. The error carries the glyph
/// and nothing else.
pub fn validate(glyph: Glyph) -> Result<Glyph> {
    if glyph.chars().all(is_allowed) {
        Ok(glyph)
    } else {
        Err(OcrError::InvalidGlyphCharacter { glyph })
    }
}

// ============================================================================
// TESTS
// ============================================================================
