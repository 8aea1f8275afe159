//! Double-buffered row-multiplexing display driver
//!
//! Converts an 8x8 frame into hardware-output lines, holds them in two
//! alternating render buffers and scans one row per fast-timer tick.
//! The buffer-swap protocol guarantees a new frame only ever appears at
//! a frame boundary, never mid-write.

pub mod buffer;
pub mod driver;

pub use buffer::{RenderBuffer, RenderLine, ScanConfig, SwapState};
pub use driver::MatrixDriver;
