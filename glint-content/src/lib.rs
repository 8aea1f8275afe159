//! Built-in display content for the Glint badge.
//!
//! Everything here is static read-only data: sprite bitmaps, the
//! animation sequences that order them, the marquee font and the
//! message strings the sequencer can interleave. The firmware hands
//! [`CATALOG`] to `glint_core::sequencer::Sequencer` at boot.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod sprites;

use glint_core::catalog::{Catalog, Frame, Sequence};

pub use font::FONT;
pub use sprites::SPRITES;

/// Frame shown on the active buffer before the first sequence loads.
pub const STARTUP_FIRST: Frame = sprites::CHECKER_A;
/// Frame staged behind [`STARTUP_FIRST`] at boot.
pub const STARTUP_SECOND: Frame = sprites::CHECKER_B;

/// Animation sequences. The invaders appear twice so a random pick
/// lands on them more often than on the rarer animations.
pub const SEQUENCES: &[Sequence] = &[
    Sequence {
        display_speed: 14,
        display_length: 20,
        sprites: &[0, 1],
    },
    Sequence {
        display_speed: 14,
        display_length: 20,
        sprites: &[2, 3],
    },
    Sequence {
        display_speed: 14,
        display_length: 20,
        sprites: &[0, 1],
    },
    Sequence {
        display_speed: 14,
        display_length: 20,
        sprites: &[2, 3],
    },
    Sequence {
        display_speed: 6,
        display_length: 10,
        sprites: &[4, 5],
    },
    Sequence {
        display_speed: 3,
        display_length: 5,
        sprites: &[6, 7, 8, 9, 9, 8, 7, 6],
    },
    Sequence {
        display_speed: 3,
        display_length: 5,
        sprites: &[6, 7, 8, 9, 8, 7, 6],
    },
];

/// Marquee messages. Upper case only, the font has no lowercase.
pub const MESSAGES: &[&str] = &["GLINT", "HELLO WORLD", "GAME OVER"];

/// One in this many animation frames rolls a message instead.
pub const MESSAGE_PROBABILITY: u16 = 10;

/// The complete built-in catalog.
pub const CATALOG: Catalog = Catalog {
    sprites: SPRITES,
    sequences: SEQUENCES,
    messages: MESSAGES,
    font: FONT,
    message_probability: MESSAGE_PROBABILITY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_reference_valid_sprites() {
        for (i, seq) in SEQUENCES.iter().enumerate() {
            assert!(!seq.sprites.is_empty(), "sequence {i} is empty");
            for &idx in seq.sprites {
                assert!(
                    (idx as usize) < SPRITES.len(),
                    "sequence {i} references missing sprite {idx}"
                );
            }
        }
    }

    #[test]
    fn test_messages_render_with_the_builtin_font() {
        for msg in MESSAGES {
            assert!(!msg.is_empty());
            for byte in msg.bytes() {
                assert!(
                    FONT.glyph(byte).is_some(),
                    "message {msg:?} contains unrenderable byte {byte:#04x}"
                );
            }
        }
    }

    #[test]
    fn test_catalog_is_usable() {
        assert!(!CATALOG.sprites.is_empty());
        assert!(!CATALOG.sequences.is_empty());
        assert!(CATALOG.message_probability > 1);
    }
}
