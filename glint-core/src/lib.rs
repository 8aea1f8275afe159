//! Board-agnostic core of the Glint LED badge firmware
//!
//! This crate contains all real-time logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (row output, random source)
//! - Cooperative bitmask scheduler (states and one-shot tasks)
//! - Double-buffered row-multiplexing display driver
//! - Animation and marquee-text sequencer
//! - Frame relay for externally supplied frames
//! - Content catalog type definitions
//!
//! Timing is external: a fast timer drives [`display::MatrixDriver::scan_step`],
//! two slow timers drive the sequencer ticks, and the main loop drains
//! the scheduler. The firmware crate provides those timers; host tests
//! call the same entry points directly.

#![no_std]
#![deny(unsafe_code)]

pub mod catalog;
pub mod display;
pub mod relay;
pub mod rng;
pub mod scheduler;
pub mod sequencer;
pub mod traits;
