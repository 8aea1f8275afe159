//! Random source trait
//!
//! The sequencer only needs "an integer below some bound". Keeping that
//! behind a trait lets tests script the exact choices the sequencer
//! will make.

/// Bounded pseudo-random integer source.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. A bound of 0 returns 0.
    fn next(&mut self, bound: u16) -> u16;
}
