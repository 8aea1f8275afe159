//! Built-in sprite bitmaps.
//!
//! Each sprite is eight row bytes, top to bottom, bit 0 on the left
//! edge of the matrix. Sequences in [`crate::SEQUENCES`] index into
//! [`SPRITES`] by position.

use glint_core::catalog::Frame;

/// Invader, arms down.
pub const INVADER_A: Frame = [0x18, 0x3C, 0x7E, 0xDB, 0xFF, 0x24, 0x5A, 0xA5];
/// Invader, arms tucked.
pub const INVADER_B: Frame = [0x18, 0x3C, 0x7E, 0xDB, 0xFF, 0x24, 0x42, 0x24];
/// Crab invader, claws out.
pub const CRAB_A: Frame = [0x81, 0x5A, 0x3C, 0x7E, 0xDB, 0x99, 0x24, 0x42];
/// Crab invader, claws in.
pub const CRAB_B: Frame = [0x00, 0x5A, 0xBD, 0x7E, 0xDB, 0x99, 0x42, 0x24];
/// Small heart.
pub const HEART_SMALL: Frame = [0x00, 0x66, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00];
/// Large heart, one row taller than [`HEART_SMALL`].
pub const HEART_BIG: Frame = [0x66, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00];
/// Burst animation, spark.
pub const BURST_0: Frame = [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00];
/// Burst animation, small ring.
pub const BURST_1: Frame = [0x00, 0x00, 0x3C, 0x24, 0x24, 0x3C, 0x00, 0x00];
/// Burst animation, open ring.
pub const BURST_2: Frame = [0x00, 0x3C, 0x42, 0x81, 0x81, 0x42, 0x3C, 0x00];
/// Burst animation, full flare.
pub const BURST_3: Frame = [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81];
/// Checkerboard, even phase. Shown while waiting for the first sequence.
pub const CHECKER_A: Frame = [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55];
/// Checkerboard, odd phase.
pub const CHECKER_B: Frame = [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA];

/// All sprites, in the order sequences reference them.
pub const SPRITES: &[Frame] = &[
    INVADER_A,   // 0
    INVADER_B,   // 1
    CRAB_A,      // 2
    CRAB_B,      // 3
    HEART_SMALL, // 4
    HEART_BIG,   // 5
    BURST_0,     // 6
    BURST_1,     // 7
    BURST_2,     // 8
    BURST_3,     // 9
    CHECKER_A,   // 10
    CHECKER_B,   // 11
];
