//! Output capability traits for the LED matrix
//!
//! The display driver never touches pins directly. It computes
//! hardware-ready [`RenderLine`] values and hands them to a [`RowSink`],
//! which maps the three output groups (two row-select, one column-drive)
//! onto whatever the board wires up.

use crate::display::RenderLine;

/// Byte-wide output capability consumed by the display driver.
///
/// Implementations must be loop-free over data: `scan_step` runs inside
/// the fast timer and has to finish well within one tick period.
pub trait RowSink {
    /// Assert one row: the select groups pick the row transistor, the
    /// drive group lights the row's columns.
    ///
    /// Implementations should apply the drive value before the select
    /// values so a row is never enabled with stale column data.
    fn assert_row(&mut self, line: RenderLine);

    /// Release all outputs (no row selected, no columns driven).
    fn blank(&mut self) {
        self.assert_row(RenderLine::BLANK);
    }
}

/// Single-bit output for the optional status indicator.
pub trait StatusIndicator {
    fn set(&mut self, on: bool);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use heapless::Vec;

    /// Records every assert/blank for later inspection in tests.
    pub struct RecordingSink {
        pub writes: Vec<RenderLine, 64>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self { writes: Vec::new() }
        }

        /// The most recent non-blank write, if any.
        pub fn last_lit(&self) -> Option<RenderLine> {
            self.writes
                .iter()
                .rev()
                .copied()
                .find(|l| *l != RenderLine::BLANK)
        }
    }

    impl RowSink for RecordingSink {
        fn assert_row(&mut self, line: RenderLine) {
            // Ring-like behavior: drop the oldest half when full so long
            // scan simulations keep recording.
            if self.writes.is_full() {
                let tail: Vec<RenderLine, 64> =
                    self.writes.iter().skip(32).copied().collect();
                self.writes = tail;
            }
            let _ = self.writes.push(line);
        }
    }
}
