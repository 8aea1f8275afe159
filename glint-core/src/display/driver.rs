//! The matrix driver: frame loading and the row-scan step
//!
//! `load_frame` runs in producer context (sequencer tick or byte link)
//! and always writes the buffer the scan is *not* showing.
//! `scan_step` runs once per fast-timer tick and must stay loop-free:
//! one blank, one row assert, one cursor increment, one flag check at
//! the wrap. Swaps only happen when the cursor wraps to zero, so a
//! half-drawn frame is never shown and a half-written buffer is never
//! scanned.

use crate::catalog::Frame;
use crate::traits::RowSink;

use super::buffer::{RenderBuffer, RenderLine, ScanConfig, SwapFlags, SwapState, EMPTY_BUFFER};

/// Double-buffered row-multiplexing driver over a [`RowSink`].
pub struct MatrixDriver<O: RowSink> {
    out: O,
    buffers: [RenderBuffer; 2],
    /// Index of the buffer the scan is showing.
    active: usize,
    /// Scan cursor; low three bits select the row, higher bits (when
    /// dot correction extends the period) count dimming sub-cycles.
    cursor: u8,
    flags: SwapFlags,
    config: ScanConfig,
}

impl<O: RowSink> MatrixDriver<O> {
    pub fn new(out: O, config: ScanConfig) -> Self {
        Self {
            out,
            buffers: [EMPTY_BUFFER; 2],
            active: 0,
            cursor: 0,
            flags: SwapFlags::new(),
            config,
        }
    }

    /// Translate a frame into the editable buffer.
    ///
    /// The buffer is locked for the duration of the write; an advance
    /// request arriving mid-computation is deferred at the frame
    /// boundary instead of exposing a half-written buffer.
    pub fn load_frame(&mut self, frame: &Frame) {
        let target = self.active ^ 1;
        self.flags.lock();
        for (row, &bits) in frame.iter().enumerate() {
            self.buffers[target][row] = RenderLine::from_row(row as u8, bits);
        }
        self.flags.unlock();
    }

    /// Request a buffer swap. The swap itself happens inside
    /// `scan_step` at the next frame boundary; only the scan knows when
    /// it no longer needs the current buffer.
    pub fn advance_buffer(&mut self) {
        self.flags.request_advance();
    }

    /// Pre-load both buffers so the matrix shows something before the
    /// first sequence lands: `first` is displayed immediately, `second`
    /// is staged.
    pub fn load_startup_frames(&mut self, first: &Frame, second: &Frame) {
        self.active = 0;
        self.load_frame(second);
        self.active = 1;
        self.load_frame(first);
        self.active = 0;
    }

    /// One fast-timer tick: assert the current row of the active buffer
    /// and advance the scan cursor. At the cursor wrap, consume a
    /// pending (and unlocked) advance request by swapping buffers.
    ///
    /// With dot correction enabled the scan period is 32 instead of 8;
    /// on sub-cycles with cursor bit 3 set, sparse rows stay blanked so
    /// their duty cycle is shortened relative to dense rows.
    pub fn scan_step(&mut self) {
        self.out.blank();

        let line = self.buffers[self.active][usize::from(self.cursor & 0x07)];
        let skip = self.cursor & 0x08 != 0 && line.dimmed();
        if !skip {
            self.out.assert_row(line);
        }

        self.cursor = self.cursor.wrapping_add(1) & self.config.cursor_mask();
        if self.cursor == 0 && self.flags.take_advance() {
            self.active ^= 1;
        }
    }

    /// Index of the buffer currently being scanned.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// A row of the buffer currently being scanned.
    pub fn active_line(&self, row: usize) -> RenderLine {
        self.buffers[self.active][row]
    }

    /// A row of the editable (staged) buffer.
    pub fn staged_line(&self, row: usize) -> RenderLine {
        self.buffers[self.active ^ 1][row]
    }

    /// Current state of the swap handshake.
    pub fn swap_state(&self) -> SwapState {
        self.flags.state()
    }

    pub fn config(&self) -> ScanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::output::testing::RecordingSink;

    fn driver(config: ScanConfig) -> MatrixDriver<RecordingSink> {
        MatrixDriver::new(RecordingSink::new(), config)
    }

    #[test]
    fn test_lit_counts_follow_population_count() {
        let mut drv = driver(ScanConfig::default());
        let mut frame = [0u8; 8];
        frame[3] = 0xFF;
        frame[4] = 0x01;
        drv.load_frame(&frame);

        assert_eq!(drv.staged_line(3).lit, 8);
        assert_eq!(drv.staged_line(4).lit, 1);
        assert_eq!(drv.staged_line(0).lit, 0);
    }

    #[test]
    fn test_load_frame_targets_inactive_buffer() {
        let mut drv = driver(ScanConfig::default());
        let frame = [0xAA; 8];
        drv.load_frame(&frame);

        assert_eq!(drv.active_line(0).drive, 0);
        assert_eq!(drv.staged_line(0).drive, 0xAA);
        // The write completed, so the lock is released again.
        assert_eq!(drv.swap_state(), SwapState::Idle);
    }

    #[test]
    fn test_swap_happens_exactly_at_cursor_wrap() {
        let mut drv = driver(ScanConfig::default());
        drv.load_frame(&[0x55; 8]);
        drv.advance_buffer();
        assert_eq!(drv.swap_state(), SwapState::AdvancePending);

        // Seven steps into the cycle: still showing the old buffer.
        for _ in 0..7 {
            drv.scan_step();
            assert_eq!(drv.active_index(), 0);
        }
        // The eighth step wraps the cursor and performs the swap.
        drv.scan_step();
        assert_eq!(drv.active_index(), 1);
        assert_eq!(drv.swap_state(), SwapState::Idle);

        // No further swap without a new request.
        for _ in 0..8 {
            drv.scan_step();
        }
        assert_eq!(drv.active_index(), 1);
    }

    #[test]
    fn test_scan_walks_all_rows_in_order() {
        let mut drv = driver(ScanConfig::default());
        drv.load_frame(&[0xFF; 8]);
        drv.advance_buffer();
        for _ in 0..8 {
            drv.scan_step();
        }
        drv.out.writes.clear();

        for _ in 0..8 {
            drv.scan_step();
        }
        let lit: heapless::Vec<RenderLine, 64> = drv
            .out
            .writes
            .iter()
            .copied()
            .filter(|l| *l != RenderLine::BLANK)
            .collect();
        assert_eq!(lit.len(), 8);
        for (row, line) in lit.iter().enumerate() {
            assert_eq!(*line, RenderLine::from_row(row as u8, 0xFF));
        }
    }

    #[test]
    fn test_dot_correction_blanks_sparse_rows_on_subcycles() {
        let config = ScanConfig {
            dot_correction: true,
        };
        let mut drv = driver(config);
        let mut frame = [0u8; 8];
        frame[0] = 0x01; // sparse: dimmed on sub-cycles
        frame[1] = 0xFF; // dense: always shown
        drv.load_frame(&frame);
        drv.advance_buffer();
        // Full 32-step cycle brings the frame live.
        for _ in 0..32 {
            drv.scan_step();
        }
        assert_eq!(drv.active_index(), 1);
        drv.out.writes.clear();

        // Steps 8..16 have cursor bit 3 set: the sparse row must stay
        // blank there while the dense row is still asserted.
        for _ in 0..16 {
            drv.scan_step();
        }
        let writes = &drv.out.writes;
        // Pass one (cursor 0..8): both rows asserted, two writes per
        // step (blank + assert).
        assert_eq!(writes[1].drive, 0x01);
        assert_eq!(writes[3].drive, 0xFF);
        // Pass two (cursor 8..16): only the dense row is asserted.
        let pass_two: heapless::Vec<RenderLine, 64> = writes
            .iter()
            .skip(16)
            .copied()
            .filter(|l| *l != RenderLine::BLANK)
            .collect();
        assert_eq!(pass_two.len(), 1);
        assert_eq!(pass_two[0].drive, 0xFF);
    }

    #[test]
    fn test_swap_period_is_32_with_dot_correction() {
        let config = ScanConfig {
            dot_correction: true,
        };
        let mut drv = driver(config);
        drv.load_frame(&[0x01; 8]);
        drv.advance_buffer();
        for _ in 0..31 {
            drv.scan_step();
            assert_eq!(drv.active_index(), 0);
        }
        drv.scan_step();
        assert_eq!(drv.active_index(), 1);
    }

    #[test]
    fn test_startup_frames_fill_both_buffers() {
        let mut drv = driver(ScanConfig::default());
        drv.load_startup_frames(&[0x18; 8], &[0x24; 8]);

        assert_eq!(drv.active_index(), 0);
        assert_eq!(drv.active_line(0).drive, 0x18);
        assert_eq!(drv.staged_line(0).drive, 0x24);
    }
}
