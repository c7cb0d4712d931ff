//! Seven-segment font tables.
//!
//! Segment bit layout (common TM1638 convention):
//!
//! ```text
//!  bit 0: a (top)        bit 4: e (bottom-left)
//!  bit 1: b (top-right)  bit 5: f (top-left)
//!  bit 2: c (bot-right)  bit 6: g (middle)
//!  bit 3: d (bottom)     bit 7: dot
//! ```

use log::warn;

use super::SegmentLine;

/// Glyph masks for digits 0-9.
pub const DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Dash glyph (`-`), middle segment only.
pub const DASH: u8 = 0x40;

/// Underscore glyph (`_`), bottom segment only.
pub const UNDERSCORE: u8 = 0x08;

/// Blank cell.
pub const BLANK: u8 = 0x00;

/// Decimal point bit, OR-ed onto the preceding cell.
pub const DOT: u8 = 0x80;

/// Glyph mask for a single decimal digit.
///
/// Panics if `digit > 9`; digits come from answer sequences that are
/// validated at setup.
#[must_use]
pub fn digit(digit: u8) -> u8 {
    DIGITS[digit as usize]
}

/// Reverse lookup: which decimal digit does this mask show?
///
/// Returns `None` for non-digit glyphs. Used by input-mapping hooks
/// that resolve a pressed cell back to the digit it displays.
#[must_use]
pub fn decode_digit(mask: u8) -> Option<u8> {
    DIGITS.iter().position(|&m| m == mask).map(|i| i as u8)
}

/// Glyph mask for a character, if the font has one.
///
/// Case-insensitive. Covers digits plus the letters the stock screens
/// need (`--SAFE--`, `--dead--`, `Error`).
#[must_use]
pub fn encode_char(ch: char) -> Option<u8> {
    if let Some(d) = ch.to_digit(10) {
        return Some(DIGITS[d as usize]);
    }
    match ch.to_ascii_lowercase() {
        ' ' => Some(BLANK),
        '-' => Some(DASH),
        '_' => Some(UNDERSCORE),
        'a' => Some(0x77),
        'b' => Some(0x7C),
        'c' => Some(0x39),
        'd' => Some(0x5E),
        'e' => Some(0x79),
        'f' => Some(0x71),
        'o' => Some(0x5C),
        'r' => Some(0x50),
        's' => Some(0x6D),
        _ => None,
    }
}

/// Encode a string into a segment line.
///
/// A `.` folds into the preceding cell as the dot bit. Characters the
/// font cannot show render as blank cells with a warning.
#[must_use]
pub fn encode_str(text: &str) -> SegmentLine {
    let mut line = SegmentLine::new();

    for ch in text.chars() {
        if ch == '.' {
            match line.last_mut() {
                Some(cell) => *cell |= DOT,
                None => line.push(DOT),
            }
            continue;
        }

        match encode_char(ch) {
            Some(mask) => line.push(mask),
            None => {
                warn!("no seven-segment glyph for {ch:?}; rendering blank");
                line.push(BLANK);
            }
        }
    }

    line
}
