//! Content catalog type definitions
//!
//! The catalog is read-only lookup data fixed at build time: sprite
//! bitmaps, animation sequences, the marquee font and the message list.
//! It is injected into the sequencer at construction so the core can be
//! exercised against synthetic catalogs; the built-in catalog lives in
//! the `glint-content` crate.

/// One 8x8 monochrome bitmap. Byte `r` is the bitmask of row `r`,
/// bit `i` lights the pixel in column `i`.
pub type Frame = [u8; 8];

/// A blank frame.
pub const EMPTY_FRAME: Frame = [0; 8];

/// An ordered list of sprite frames with timing parameters.
///
/// `display_speed` is a wait count between sprite advances (lower is
/// faster); `display_length` is how many update ticks the sequence runs
/// before a new one is chosen. Both are taken verbatim from the catalog
/// and never validated.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sequence {
    pub display_speed: u8,
    pub display_length: u8,
    /// Indices into [`Catalog::sprites`].
    pub sprites: &'static [u8],
}

/// One font character: up to three stored column bytes plus the width
/// in marquee columns. Widths beyond the stored columns render as blank
/// columns, which is how inter-character spacing is encoded.
///
/// Column bit `i` lights display row `i + 2`; glyphs occupy the six
/// lower rows of the matrix.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    pub columns: [u8; 3],
    pub width: u8,
}

/// Number of display rows a glyph may use.
pub const GLYPH_ROWS: u8 = 6;
/// Topmost display row used by glyphs.
pub const GLYPH_ROW_OFFSET: u8 = 2;

/// Glyph table covering a contiguous character range.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    /// Character code of `glyphs[0]`.
    pub first_char: u8,
    pub glyphs: &'static [Glyph],
}

impl Font {
    /// Look up the glyph for a character. Characters outside the table
    /// range have no glyph and render as blank.
    pub fn glyph(&self, c: u8) -> Option<&Glyph> {
        let index = c.checked_sub(self.first_char)? as usize;
        self.glyphs.get(index)
    }
}

/// The complete content catalog consumed by the sequencer.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub sprites: &'static [Frame],
    pub sequences: &'static [Sequence],
    pub messages: &'static [&'static str],
    pub font: Font,
    /// A message interrupts the animation roughly once per this many
    /// render opportunities (the die roll must hit 1).
    pub message_probability: u16,
}
