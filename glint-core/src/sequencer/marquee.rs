//! Marquee text session
//!
//! Renders a message one glyph column per tick into a scratch frame.
//! New pixels enter at column 7 and the whole frame shifts one column
//! toward column 0 each tick, so the text scrolls across the matrix.
//! Glyphs occupy rows 2-7; a glyph wider than its stored columns emits
//! blank columns, which is how inter-character spacing is encoded.

use heapless::Vec;

use crate::catalog::{Font, Frame, GLYPH_ROWS, GLYPH_ROW_OFFSET};

/// Longest message kept; catalog entries beyond this are truncated.
pub const MAX_MESSAGE_LEN: usize = 40;

/// Column width used for characters the font does not cover.
const FALLBACK_WIDTH: u8 = 4;

/// Scroll state for one message.
pub(crate) struct Marquee {
    message: Vec<u8, MAX_MESSAGE_LEN>,
    char_index: usize,
    /// Next column of the active character to emit.
    col_index: u8,
    /// Total marquee columns of the active character.
    width: u8,
    /// Empty columns shifted in since the outro began.
    outro_cols: u8,
}

impl Marquee {
    pub(crate) const fn new() -> Self {
        Self {
            message: Vec::new(),
            char_index: 0,
            col_index: 0,
            width: 0,
            outro_cols: 0,
        }
    }

    /// Begin a new message. Returns `false` for an empty message, which
    /// the caller treats as a no-op.
    pub(crate) fn start(&mut self, message: &str, font: &Font) -> bool {
        if message.is_empty() {
            return false;
        }
        self.message.clear();
        let _ = self
            .message
            .extend_from_slice(&message.as_bytes()[..message.len().min(MAX_MESSAGE_LEN)]);
        self.char_index = 0;
        self.col_index = 0;
        self.width = self.char_width(0, font);
        self.outro_cols = 0;
        true
    }

    fn char_width(&self, index: usize, font: &Font) -> u8 {
        self.message
            .get(index)
            .and_then(|&c| font.glyph(c))
            .map(|g| g.width)
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// One text tick: shift, emit the next glyph column, advance the
    /// character bookkeeping. Returns `true` once the last column of
    /// the last character has been emitted (time for the outro).
    pub(crate) fn step_text(&mut self, scratch: &mut Frame, font: &Font) -> bool {
        shift_left(scratch);

        let column = self
            .message
            .get(self.char_index)
            .and_then(|&c| font.glyph(c))
            .and_then(|g| g.columns.get(usize::from(self.col_index)))
            .copied()
            .unwrap_or(0);
        for bit in 0..GLYPH_ROWS {
            if column & (1 << bit) != 0 {
                scratch[usize::from(bit + GLYPH_ROW_OFFSET)] |= 0x80;
            }
        }

        self.col_index += 1;
        if self.col_index >= self.width {
            self.char_index += 1;
            if self.char_index >= self.message.len() {
                return true;
            }
            self.col_index = 0;
            self.width = self.char_width(self.char_index, font);
        }
        false
    }

    /// One outro tick: shift in an empty column. Returns `true` once
    /// eight empty columns have passed and the matrix is fully clear.
    pub(crate) fn step_outro(&mut self, scratch: &mut Frame) -> bool {
        shift_left(scratch);
        self.outro_cols += 1;
        self.outro_cols >= 8
    }
}

/// Move every pixel one column toward column 0.
fn shift_left(frame: &mut Frame) {
    for row in frame.iter_mut() {
        *row >>= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Glyph, EMPTY_FRAME};

    // 'H' as 3 stored columns / width 3, 'I' as 1 stored column padded
    // to width 4 (three trailing blank columns).
    const GLYPHS: [Glyph; 2] = [
        Glyph {
            columns: [0x3F, 0x04, 0x3F],
            width: 3,
        },
        Glyph {
            columns: [0x3F, 0x00, 0x00],
            width: 4,
        },
    ];

    const FONT: Font = Font {
        first_char: b'H',
        glyphs: &GLYPHS,
    };

    #[test]
    fn test_empty_message_refused() {
        let mut m = Marquee::new();
        assert!(!m.start("", &FONT));
    }

    #[test]
    fn test_message_column_count() {
        let mut m = Marquee::new();
        assert!(m.start("HI", &FONT));

        let mut scratch = EMPTY_FRAME;
        // Widths 3 + 4: the message is done on exactly the 7th tick.
        for tick in 1..=7 {
            let done = m.step_text(&mut scratch, &FONT);
            assert_eq!(done, tick == 7, "tick {tick}");
        }
    }

    #[test]
    fn test_columns_enter_at_bit7_and_march_down() {
        let mut m = Marquee::new();
        assert!(m.start("H", &FONT));

        let mut scratch = EMPTY_FRAME;
        m.step_text(&mut scratch, &FONT);
        // First column 0x3F: rows 2..7 lit, all still at column 7.
        for row in 2..8 {
            assert_eq!(scratch[row] & 0x80, 0x80, "row {row}");
        }
        assert_eq!(scratch[0], 0);

        m.step_text(&mut scratch, &FONT);
        // The first column moved one step toward column 0.
        assert_eq!(scratch[2] & 0x40, 0x40);
    }

    #[test]
    fn test_outro_clears_frame_in_eight_ticks() {
        let mut m = Marquee::new();
        assert!(m.start("HI", &FONT));
        let mut scratch = EMPTY_FRAME;
        while !m.step_text(&mut scratch, &FONT) {}

        for tick in 1..=8 {
            let done = m.step_outro(&mut scratch);
            assert_eq!(done, tick == 8, "tick {tick}");
        }
        assert_eq!(scratch, EMPTY_FRAME);
    }

    #[test]
    fn test_unknown_chars_render_blank() {
        let mut m = Marquee::new();
        assert!(m.start("@", &FONT));
        let mut scratch = EMPTY_FRAME;
        for _ in 0..FALLBACK_WIDTH {
            m.step_text(&mut scratch, &FONT);
        }
        assert_eq!(scratch, EMPTY_FRAME);
    }
}
