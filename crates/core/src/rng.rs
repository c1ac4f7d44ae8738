//! RNG module - deterministic random numbers for spawning
//!
//! A simple LCG keeps games reproducible: the same seed yields the same fruit,
//! power-up and obstacle layout. Unseeded games draw their seed from the clock.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle quickly.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in the inclusive range [lo, hi]
    pub fn next_in(&mut self, lo: i16, hi: i16) -> i16 {
        let span = (hi as i32 - lo as i32 + 1).max(1) as u32;
        (lo as i32 + self.next_range(span) as i32) as i16
    }
}

/// Seed derived from the current time
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
