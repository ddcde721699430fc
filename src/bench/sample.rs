//! Bounded sample sequences derived from the LCG
//!
//! `value = (state mod range) + min`, where `range = max - min + 1`.
//!
//! The range is computed in 128-bit arithmetic, so any `i64` bound pair works
//! (range up to 2^64). A range above 2^32 makes the reduction the identity.

use crate::bench::lcg::Lcg;
use crate::core_types::{Sample, Seed};
use crate::error::BenchError;
use serde::Serialize;

/// Inclusive sample bounds, `min <= max` guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Result<Self, BenchError> {
        if min > max {
            return Err(BenchError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of distinct values, `max - min + 1`, in `[1, 2^64]`.
    pub fn span(&self) -> u128 {
        (self.max as i128 - self.min as i128 + 1) as u128
    }

    /// Map one generator state into the bounds.
    #[inline]
    pub fn project(&self, state: u32) -> Sample {
        let offset = (state as u128 % self.span()) as i128;
        // offset < span, so the result is <= max
        (self.min as i128 + offset) as i64
    }
}

/// Lazily generated sample sequence, O(1) memory.
#[derive(Debug, Clone)]
pub struct Samples {
    rng: Lcg,
    bounds: Bounds,
    remaining: usize,
}

impl Iterator for Samples {
    type Item = Sample;

    #[inline]
    fn next(&mut self) -> Option<Sample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.bounds.project(self.rng.next_state()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Samples {}

/// Sample stream of `len` values from a fresh generator seeded with `seed`.
pub fn samples(seed: Seed, bounds: Bounds, len: usize) -> Samples {
    Samples {
        rng: Lcg::new(seed),
        bounds,
        remaining: len,
    }
}

/// Collected form of [`samples`].
pub fn sample_vec(seed: Seed, bounds: Bounds, len: usize) -> Vec<Sample> {
    samples(seed, bounds, len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_rejects_inverted() {
        assert_eq!(
            Bounds::new(5, -5),
            Err(BenchError::InvertedBounds { min: 5, max: -5 })
        );
    }

    #[test]
    fn test_bounds_single_value() {
        let b = Bounds::new(3, 3).unwrap();
        assert_eq!(b.span(), 1);
        assert_eq!(b.project(0), 3);
        assert_eq!(b.project(u32::MAX), 3);
    }

    #[test]
    fn test_span_full_i64_range() {
        let b = Bounds::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(b.span(), 1u128 << 64);
        // Identity reduction: state is added to min unchanged
        assert_eq!(b.project(17), i64::MIN + 17);
    }

    #[test]
    fn test_wide_range_is_identity() {
        let b = Bounds::new(0, 1i64 << 40).unwrap();
        assert_eq!(b.project(u32::MAX), u32::MAX as i64);
    }

    /// Reference sequence for seed 42, bounds [-10, 10].
    #[test]
    fn test_seed_42_reference_samples() {
        let b = Bounds::new(-10, 10).unwrap();
        assert_eq!(
            sample_vec(42, b, 10),
            vec![0, 6, 7, 5, 2, 3, 10, 6, -8, -8]
        );
    }

    #[test]
    fn test_seed_0_reference_samples() {
        let b = Bounds::new(0, 99).unwrap();
        assert_eq!(sample_vec(0, b, 5), vec![23, 62, 97, 84, 47]);
    }

    #[test]
    fn test_samples_stay_in_bounds() {
        let b = Bounds::new(-7, 13).unwrap();
        for v in samples(2024, b, 5_000) {
            assert!((-7..=13).contains(&v), "sample {} out of bounds", v);
        }
    }

    #[test]
    fn test_samples_exact_size() {
        let b = Bounds::new(-1, 1).unwrap();
        let mut it = samples(1, b, 3);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        assert_eq!(samples(1, b, 0).next(), None);
    }

    #[test]
    fn test_lazy_and_collected_agree() {
        let b = Bounds::new(-100, 100).unwrap();
        let lazy: Vec<i64> = samples(555, b, 256).collect();
        assert_eq!(lazy, sample_vec(555, b, 256));
    }
}
