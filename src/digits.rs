// DigitMatcher - canonical glyph table and exact-match recognition

use crate::account::DigitOutcome;
use crate::glyph::Glyph;

// ============================================================================
// CANONICAL GLYPH TABLE
// ============================================================================

/// Reference glyph for each digit, indexed by digit value
///
/// Read-only for the life of the process, so it is safe to share between
/// threads without locking.
pub static DIGIT_GLYPHS: [Glyph; 10] = [
    Glyph::from_ascii([b" _ ", b"| |", b"|_|"]), // 0
    Glyph::from_ascii([b"   ", b"  |", b"  |"]), // 1
    Glyph::from_ascii([b" _ ", b" _|", b"|_ "]), // 2
    Glyph::from_ascii([b" _ ", b" _|", b" _|"]), // 3
    Glyph::from_ascii([b"   ", b"|_|", b"  |"]), // 4
    Glyph::from_ascii([b" _ ", b"|_ ", b" _|"]), // 5
    Glyph::from_ascii([b" _ ", b"|_ ", b"|_|"]), // 6
    Glyph::from_ascii([b" _ ", b"  |", b"  |"]), // 7
    Glyph::from_ascii([b" _ ", b"|_|", b"|_|"]), // 8
    Glyph::from_ascii([b" _ ", b"|_|", b" _|"]), // 9
];

/// Canonical glyph for `digit`, or `None` above 9
pub fn canonical_glyph(digit: u8) -> Option<Glyph> {
    DIGIT_GLYPHS.get(digit as usize).copied()
}

/// True when no two table entries are equal
pub fn table_is_consistent() -> bool {
    DIGIT_GLYPHS
        .iter()
        .enumerate()
        .all(|(i, a)| DIGIT_GLYPHS[i + 1..].iter().all(|b| a != b))
}

// ============================================================================
// MATCHING
// ============================================================================

/// Map a glyph to its digit
///
/// Linear scan in digit order. A glyph matching no entry is a damaged or
/// unknown digit, reported as `Unrecognized` rather than an error.
pub fn match_glyph(glyph: &Glyph) -> DigitOutcome {
    debug_assert!(table_is_consistent(), "canonical glyph table has duplicates");

    DIGIT_GLYPHS
        .iter()
        .position(|candidate| candidate == glyph)
        .map(|d| DigitOutcome::Digit(d as u8))
        .unwrap_or(DigitOutcome::Unrecognized)
}

// ============================================================================
// TESTS
// ============================================================================
