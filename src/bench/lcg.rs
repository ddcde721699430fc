//! 32-bit Linear Congruential Generator (LCG)
//!
//! Numerical Recipes constants, bit-exact with the reference benchmark programs
//! so totals can be compared across implementations.
//!
//! # Algorithm
//!
//! LCG formula: `state = (state * 1664525 + 1013904223) mod 2^32`
//!
//! # Example
//!
//! ```rust
//! use subarray_bench::bench::lcg::Lcg;
//!
//! let mut rng = Lcg::new(42);
//! assert_eq!(rng.next_state(), 1_083_814_273);
//! ```

use crate::core_types::Seed;

/// Caller-owned LCG. There is no shared or global instance: every trial builds
/// its own from a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// LCG multiplier (A)
    pub const MULTIPLIER: u32 = 1_664_525;

    /// LCG increment (C)
    pub const INCREMENT: u32 = 1_013_904_223;

    /// Create a generator whose current state is `seed`.
    ///
    /// Unlike `java.util.Random` the seed is used as-is, no scrambling.
    pub fn new(seed: Seed) -> Self {
        Self { state: seed }
    }

    /// Current state, i.e. the last emitted value (or the seed before any step).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance one step and return the new state.
    ///
    /// `u32` wrapping arithmetic is exactly the `mod 2^32` reduction.
    #[inline]
    pub fn next_state(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

/// Endless stream of states.
impl Iterator for Lcg {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.next_state())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
