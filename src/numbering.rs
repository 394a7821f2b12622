//! Ayah numbering: decorate a 1-based ayah index as a localized numeral.
//!
//! RTL lines get the index in a right-to-left digit block, wrapped in ornate
//! parenthesis glyphs and spliced at the tail of the line. LTR lines get
//! ASCII digits in plain parentheses at the head. The digit block depends on
//! the Arabic font family: a few well-known Quran fonts place their digit
//! glyphs at non-standard code points.

use crate::model::Direction;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// U+FD3E ORNAMENTAL LEFT PARENTHESIS.
pub const ORNATE_LEFT_PARENTHESIS: char = '\u{FD3E}';
/// U+FD3F ORNAMENTAL RIGHT PARENTHESIS.
pub const ORNATE_RIGHT_PARENTHESIS: char = '\u{FD3F}';

/// U+0660, the standard Arabic-Indic digit block.
pub const ARABIC_INDIC_ZERO: u32 = 0x0660;
/// U+06F0, the extended (Eastern) Arabic-Indic digit block.
pub const EXTENDED_ARABIC_INDIC_ZERO: u32 = 0x06F0;
/// U+0030, plain ASCII digits. Some Quran fonts ship their ayah-marker
/// digits on the ASCII code points.
pub const ASCII_ZERO: u32 = 0x0030;

static FONT_DIGIT_BASES: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    let mut bases = HashMap::new();
    bases.insert("Al Qalam Quran Majeed", EXTENDED_ARABIC_INDIC_ZERO);
    bases.insert("Al Qalam Quran Majeed 1", EXTENDED_ARABIC_INDIC_ZERO);
    bases.insert("Al Qalam Quran Majeed 2", EXTENDED_ARABIC_INDIC_ZERO);
    bases.insert("KFGQPC Uthmanic Script HAFS", ASCII_ZERO);
    bases.insert("Scheherazade", ARABIC_INDIC_ZERO);
    bases.insert("Scheherazade quran", ARABIC_INDIC_ZERO);
    bases
});

/// Answers whether a font can render a given code point. Font tables are
/// host knowledge, so the host supplies the probe; [`NoProbe`] is the
/// conservative default.
pub trait DigitProbe {
    fn can_display(&self, font_name: &str, codepoint: u32) -> bool;
}

/// Probe that never claims glyph support, so unknown fonts fall back to the
/// standard Arabic-Indic block.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProbe;

impl DigitProbe for NoProbe {
    fn can_display(&self, _font_name: &str, _codepoint: u32) -> bool {
        false
    }
}

/// Digit-base code point for a font family.
///
/// Known fonts come from a fixed table. Unknown fonts are probed for the
/// extended Arabic-Indic zero and fall back to the standard block when the
/// probe says no. This is the only place font metadata influences textual
/// content.
pub fn digit_base_for_font(font_name: &str, probe: &dyn DigitProbe) -> u32 {
    if let Some(&base) = FONT_DIGIT_BASES.get(font_name) {
        return base;
    }
    if probe.can_display(font_name, EXTENDED_ARABIC_INDIC_ZERO) {
        EXTENDED_ARABIC_INDIC_ZERO
    } else {
        ARABIC_INDIC_ZERO
    }
}

/// Render `n` as digits of the given base, most significant first.
pub fn digits(mut n: u32, base: u32) -> String {
    debug_assert!(n >= 1, "ayah indices are 1-based");
    let mut reversed = Vec::new();
    while n > 0 {
        let glyph = char::from_u32(base + n % 10).unwrap_or(char::REPLACEMENT_CHARACTER);
        reversed.push(glyph);
        n /= 10;
    }
    reversed.iter().rev().collect()
}

/// Decorated numeral for an ayah index, including its splice spacing:
/// a tail piece (leading space) for RTL, a head piece (trailing space) for
/// LTR. Never fails; `index` must be a genuine 1-based ayah position.
pub fn decorate(index: u32, direction: Direction, base: u32) -> String {
    match direction {
        Direction::Rtl => format!(
            " {}{}{}",
            ORNATE_RIGHT_PARENTHESIS,
            digits(index, base),
            ORNATE_LEFT_PARENTHESIS
        ),
        Direction::Ltr => format!("({}) ", index),
    }
}
