//! Built-in 3x6 marquee font.
//!
//! Glyphs cover the printable range from space (0x20) through `Z`
//! (0x5A). There is no lowercase; message strings are expected to be
//! upper case. Each glyph is three column bytes with bit 0 at the top
//! of the glyph band and a total advance width that includes one blank
//! spacing column. Capitals sit in bits 0 through 4, bit 5 is reserved
//! for marks that drop below the baseline.

use glint_core::catalog::{Font, Glyph};

const fn g(columns: [u8; 3], width: u8) -> Glyph {
    Glyph { columns, width }
}

/// Glyph table ordered by character code, starting at [`FIRST_CHAR`].
pub const GLYPHS: &[Glyph] = &[
    g([0x00, 0x00, 0x00], 3), // space
    g([0x17, 0x00, 0x00], 2), // !
    g([0x03, 0x00, 0x03], 4), // "
    g([0x0A, 0x1F, 0x0A], 4), // #
    g([0x12, 0x3F, 0x09], 4), // $
    g([0x19, 0x04, 0x13], 4), // %
    g([0x0A, 0x15, 0x1A], 4), // &
    g([0x03, 0x00, 0x00], 2), // '
    g([0x0E, 0x11, 0x00], 3), // (
    g([0x11, 0x0E, 0x00], 3), // )
    g([0x0A, 0x04, 0x0A], 4), // *
    g([0x04, 0x0E, 0x04], 4), // +
    g([0x20, 0x10, 0x00], 3), // ,
    g([0x04, 0x04, 0x04], 4), // -
    g([0x10, 0x00, 0x00], 2), // .
    g([0x18, 0x04, 0x03], 4), // /
    g([0x0E, 0x15, 0x0E], 4), // 0
    g([0x12, 0x1F, 0x10], 4), // 1
    g([0x19, 0x15, 0x12], 4), // 2
    g([0x11, 0x15, 0x1F], 4), // 3
    g([0x07, 0x04, 0x1F], 4), // 4
    g([0x17, 0x15, 0x09], 4), // 5
    g([0x1E, 0x15, 0x1D], 4), // 6
    g([0x01, 0x1D, 0x03], 4), // 7
    g([0x1B, 0x15, 0x1B], 4), // 8
    g([0x17, 0x15, 0x0F], 4), // 9
    g([0x0A, 0x00, 0x00], 2), // :
    g([0x20, 0x0A, 0x00], 3), // ;
    g([0x04, 0x0A, 0x11], 4), // <
    g([0x0A, 0x0A, 0x0A], 4), // =
    g([0x11, 0x0A, 0x04], 4), // >
    g([0x01, 0x15, 0x03], 4), // ?
    g([0x0E, 0x15, 0x16], 4), // @
    g([0x1E, 0x05, 0x1E], 4), // A
    g([0x1F, 0x15, 0x0A], 4), // B
    g([0x0E, 0x11, 0x11], 4), // C
    g([0x1F, 0x11, 0x0E], 4), // D
    g([0x1F, 0x15, 0x11], 4), // E
    g([0x1F, 0x05, 0x01], 4), // F
    g([0x0E, 0x11, 0x1D], 4), // G
    g([0x1F, 0x04, 0x1F], 4), // H
    g([0x11, 0x1F, 0x11], 4), // I
    g([0x08, 0x10, 0x0F], 4), // J
    g([0x1F, 0x04, 0x1B], 4), // K
    g([0x1F, 0x10, 0x10], 4), // L
    g([0x1F, 0x06, 0x1F], 4), // M
    g([0x1F, 0x02, 0x1F], 4), // N
    g([0x0E, 0x11, 0x0E], 4), // O
    g([0x1F, 0x05, 0x02], 4), // P
    g([0x0E, 0x15, 0x1E], 4), // Q
    g([0x1F, 0x05, 0x1A], 4), // R
    g([0x12, 0x15, 0x09], 4), // S
    g([0x01, 0x1F, 0x01], 4), // T
    g([0x0F, 0x10, 0x0F], 4), // U
    g([0x07, 0x18, 0x07], 4), // V
    g([0x1F, 0x08, 0x1F], 4), // W
    g([0x1B, 0x04, 0x1B], 4), // X
    g([0x03, 0x1C, 0x03], 4), // Y
    g([0x19, 0x15, 0x13], 4), // Z
];

/// Lowest character code the table covers.
pub const FIRST_CHAR: u8 = 0x20;

/// The built-in font.
pub const FONT: Font = Font {
    first_char: FIRST_CHAR,
    glyphs: GLYPHS,
};
