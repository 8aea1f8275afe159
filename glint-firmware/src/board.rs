//! Board bindings for the Glint badge
//!
//! Maps the core's output traits onto RP2040 GPIO. The matrix is wired
//! common-anode per row: row-select outputs source current (active
//! high), column-drive outputs sink it (active low, a cleared drive bit
//! leaves the column dark).

use embassy_rp::gpio::Output;

use glint_core::display::RenderLine;
use glint_core::traits::{RowSink, StatusIndicator};

/// GPIO groups driving the 8x8 matrix.
pub struct MatrixPanel {
    rows: [Output<'static>; 8],
    cols: [Output<'static>; 8],
}

impl MatrixPanel {
    pub fn new(rows: [Output<'static>; 8], cols: [Output<'static>; 8]) -> Self {
        let mut panel = Self { rows, cols };
        panel.blank();
        panel
    }
}

impl RowSink for MatrixPanel {
    fn assert_row(&mut self, line: RenderLine) {
        // Columns first so the newly selected row never flashes the
        // previous row's pattern.
        for (i, col) in self.cols.iter_mut().enumerate() {
            if line.drive & (1 << i) != 0 {
                col.set_low();
            } else {
                col.set_high();
            }
        }
        for (i, row) in self.rows.iter_mut().enumerate().take(6) {
            if line.select_lo & (1 << i) != 0 {
                row.set_high();
            } else {
                row.set_low();
            }
        }
        for (i, row) in self.rows.iter_mut().skip(6).enumerate() {
            if line.select_hi & (1 << i) != 0 {
                row.set_high();
            } else {
                row.set_low();
            }
        }
    }
}

/// The on-board status LED.
pub struct StatusLed {
    pin: Output<'static>,
}

impl StatusLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl StatusIndicator for StatusLed {
    fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
