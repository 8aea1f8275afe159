//! Multiply-with-carry pseudo-random generator
//!
//! Two-lag MWC generator. Good enough to pick animations and messages
//! without visible repetition; not a cryptographic source.

use crate::traits::RandomSource;

/// Default seed for lag A.
const SEED_A: u32 = 65_537;
/// Default seed for lag B.
const SEED_B: u32 = 12_345;

/// Multiply-with-carry generator with two 32-bit lags.
#[derive(Debug, Clone)]
pub struct Mwc {
    lag_a: u32,
    lag_b: u32,
}

impl Mwc {
    pub const fn new() -> Self {
        Self {
            lag_a: SEED_A,
            lag_b: SEED_B,
        }
    }

    /// Fold ambient entropy (boot-time counter, ADC noise, ...) into the
    /// generator so every power-up starts a different animation.
    pub fn seed(&mut self, entropy: u32) {
        self.lag_b = self.lag_b.wrapping_add(entropy);
    }

    fn step(&mut self) -> u32 {
        self.lag_a = 36_969u32
            .wrapping_mul(self.lag_a & 0xFFFF)
            .wrapping_add(self.lag_a >> 16);
        self.lag_b = 18_000u32
            .wrapping_mul(self.lag_b & 0xFFFF)
            .wrapping_add(self.lag_b >> 16);
        (self.lag_a << 16).wrapping_add(self.lag_b)
    }
}

impl Default for Mwc {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Mwc {
    fn next(&mut self, bound: u16) -> u16 {
        if bound == 0 {
            return 0;
        }
        (self.step() % u32::from(bound)) as u16
    }
}
