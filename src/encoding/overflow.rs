//! Code point overflow aliases.
//!
//! Parsers that truncate characters to their low byte (or low 16 bits) read
//! `U+0140` as `@`. Adding fixed bases to a character's code point yields
//! such aliases for structurally significant characters.

/// Offsets added to the source code point.
pub const OVERFLOW_BASES: [u32; 4] = [0x100, 0x1000, 0x10000, 0x10FFFF];

/// Returns the overflow aliases of `ch`, one single-character string per base
/// that stays inside the Unicode range.
///
/// Results above `U+10FFFF` and surrogate code points are skipped, so the
/// output has zero to four entries and the function never fails.
pub fn unicode_overflow(ch: char) -> Vec<String> {
    OVERFLOW_BASES
        .iter()
        .filter_map(|base| base.checked_add(ch as u32))
        .filter(|cp| *cp <= 0x10FFFF)
        .filter_map(char::from_u32)
        .map(String::from)
        .collect()
}
