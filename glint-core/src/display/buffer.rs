//! Render buffers and the swap handshake
//!
//! A [`RenderLine`] is one row of a frame translated into the values
//! the output groups need; a [`RenderBuffer`] is eight of them. Two
//! buffers alternate between "scanned" and "editable"; the handoff is a
//! pair of flags in one atomic byte, decoded as the explicit
//! [`SwapState`] machine so the "swap only at frame boundary, never
//! mid-write" property is directly checkable.

use portable_atomic::{AtomicU8, Ordering};

/// Rows covered by the low select group (bits 0-5); the remaining two
/// rows map onto the high select group. Fixed by the board wiring.
const SELECT_LO_ROWS: u8 = 6;

/// Rows with fewer lit LEDs than this are blanked on dimming sub-cycles
/// when dot correction is enabled. A sparse row concentrates the shared
/// drive current in few LEDs and would outshine dense rows.
const DIM_THRESHOLD: u8 = 4;

/// Hardware-ready output values for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderLine {
    /// Row-select bits for rows 0-5.
    pub select_lo: u8,
    /// Row-select bits for rows 6-7 (bits 0-1).
    pub select_hi: u8,
    /// Column-drive bits, straight from the frame row.
    pub drive: u8,
    /// Population count of `drive`, used for dot correction.
    pub lit: u8,
}

impl RenderLine {
    /// Nothing selected, nothing driven.
    pub const BLANK: Self = Self {
        select_lo: 0,
        select_hi: 0,
        drive: 0,
        lit: 0,
    };

    /// Translate one frame row into output-group values.
    pub fn from_row(row: u8, bits: u8) -> Self {
        let (select_lo, select_hi) = if row < SELECT_LO_ROWS {
            (1 << row, 0)
        } else {
            (0, 1 << (row - SELECT_LO_ROWS))
        };
        Self {
            select_lo,
            select_hi,
            drive: bits,
            lit: bits.count_ones() as u8,
        }
    }

    /// Whether this row is skipped on a dimming sub-cycle.
    pub(crate) fn dimmed(&self) -> bool {
        self.lit < DIM_THRESHOLD
    }
}

/// One complete frame in hardware-output form.
pub type RenderBuffer = [RenderLine; 8];

/// Blank render buffer for initialization.
pub(crate) const EMPTY_BUFFER: RenderBuffer = [RenderLine::BLANK; 8];

/// Scan configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// Equalize perceived brightness across rows with different lit
    /// counts by extending the scan with dimming sub-cycles. Purely a
    /// visual tweak; off by default.
    pub dot_correction: bool,
}

impl ScanConfig {
    /// Scan-cursor wrap mask: 8 steps plain, 32 with the two dimming
    /// sub-cycle bits.
    pub(crate) fn cursor_mask(&self) -> u8 {
        if self.dot_correction {
            0x1F
        } else {
            0x07
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dot_correction: false,
        }
    }
}

/// The four states of the buffer-swap handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwapState {
    /// Nothing staged, nothing being written.
    Idle,
    /// Producer is writing the editable buffer.
    Locked,
    /// A finished frame waits for the next frame boundary.
    AdvancePending,
    /// Advance was requested while a (re)write is in progress; the swap
    /// stays deferred until the lock clears.
    LockedAdvancePending,
}

const LOCKED: u8 = 1 << 0;
const ADVANCE: u8 = 1 << 1;

/// Lock/advance flag pair shared between producer and scan interrupt.
pub(crate) struct SwapFlags(AtomicU8);

impl SwapFlags {
    pub(crate) const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Producer side: mark the editable buffer as mid-write.
    pub(crate) fn lock(&self) {
        self.0.fetch_or(LOCKED, Ordering::AcqRel);
    }

    /// Producer side: writing finished.
    pub(crate) fn unlock(&self) {
        self.0.fetch_and(!LOCKED, Ordering::AcqRel);
    }

    /// Producer side: request a swap at the next frame boundary.
    pub(crate) fn request_advance(&self) {
        self.0.fetch_or(ADVANCE, Ordering::AcqRel);
    }

    /// Consumer side, called only at a frame boundary: consume a
    /// pending advance unless the buffer is mid-write. A locked advance
    /// stays pending for a later boundary.
    pub(crate) fn take_advance(&self) -> bool {
        if self.0.load(Ordering::Acquire) == ADVANCE {
            self.0.fetch_and(!ADVANCE, Ordering::AcqRel);
            true
        } else {
            false
        }
    }

    pub(crate) fn state(&self) -> SwapState {
        match self.0.load(Ordering::Acquire) & (LOCKED | ADVANCE) {
            0 => SwapState::Idle,
            LOCKED => SwapState::Locked,
            ADVANCE => SwapState::AdvancePending,
            _ => SwapState::LockedAdvancePending,
        }
    }
}
