//! Frame relay: externally supplied frames over a byte link
//!
//! Alternate mode where a counterpart endpoint streams raw 8-byte
//! frames and the local sequencer is bypassed entirely. The stream is
//! unframed: there is no start byte, no checksum and no resync. A
//! dropped or duplicated byte silently shifts every later frame
//! boundary - a known, unrecovered limitation of the link; the only way
//! out is a reset of both endpoints.

use heapless::Vec;

use crate::catalog::Frame;
use crate::display::MatrixDriver;
use crate::traits::RowSink;

/// Accumulates link bytes into frames and forwards them to the driver.
#[derive(Debug, Default)]
pub struct FrameRelay {
    pending: Vec<u8, 8>,
}

impl FrameRelay {
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Feed one received byte. The 8th byte completes a frame, which is
    /// loaded and queued for the next frame boundary immediately.
    pub fn on_byte<O: RowSink>(&mut self, byte: u8, driver: &mut MatrixDriver<O>) {
        // Cannot overflow: the vec is drained the moment it fills.
        let _ = self.pending.push(byte);
        if self.pending.is_full() {
            let mut frame: Frame = [0; 8];
            frame.copy_from_slice(&self.pending);
            driver.load_frame(&frame);
            driver.advance_buffer();
            self.pending.clear();
        }
    }

    /// Bytes received toward the frame in progress.
    pub fn fill_level(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{ScanConfig, SwapState};
    use crate::traits::output::testing::RecordingSink;

    fn driver() -> MatrixDriver<RecordingSink> {
        MatrixDriver::new(RecordingSink::new(), ScanConfig::default())
    }

    #[test]
    fn test_seven_bytes_do_nothing() {
        let mut relay = FrameRelay::new();
        let mut drv = driver();
        for byte in 0..7 {
            relay.on_byte(byte, &mut drv);
        }
        assert_eq!(relay.fill_level(), 7);
        assert_eq!(drv.swap_state(), SwapState::Idle);
        assert_eq!(drv.staged_line(0).drive, 0);
    }

    #[test]
    fn test_sixteen_bytes_produce_two_frames_in_order() {
        let mut relay = FrameRelay::new();
        let mut drv = driver();

        for byte in 1..=8 {
            relay.on_byte(byte, &mut drv);
        }
        // First frame staged and queued.
        assert_eq!(drv.swap_state(), SwapState::AdvancePending);
        for row in 0..8 {
            assert_eq!(drv.staged_line(row).drive, row as u8 + 1);
        }

        // Scan cycle brings it live.
        for _ in 0..8 {
            drv.scan_step();
        }
        assert_eq!(drv.active_index(), 1);

        for byte in 11..=18 {
            relay.on_byte(byte, &mut drv);
        }
        assert_eq!(relay.fill_level(), 0);
        for row in 0..8 {
            assert_eq!(drv.active_line(row).drive, row as u8 + 1);
            assert_eq!(drv.staged_line(row).drive, row as u8 + 11);
        }
        assert_eq!(drv.swap_state(), SwapState::AdvancePending);
    }
}
