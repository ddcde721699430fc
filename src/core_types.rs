//! Core types used throughout the benchmark
//!
//! Type aliases give the numeric widths a name so the generator, solver and
//! aggregator agree on them.

/// LCG seed / state - a 32-bit unsigned value.
///
/// # Constraints:
/// - Arithmetic on it is always modulo 2^32 (`wrapping_*`)
/// - The same seed always yields the same sample sequence
pub type Seed = u32;

/// One generated sample. Bounds are `i64`, so every sample fits in `i64`.
pub type Sample = i64;

/// Maximum subarray sum for a single trial.
///
/// # Width:
/// Samples satisfy |x| <= 2^63 and a sequence holds fewer than 2^64 elements,
/// so every partial sum stays below 2^127 in magnitude.
pub type TrialSum = i128;

/// Trial count used by every default run
pub const DEFAULT_TRIALS: u32 = 20;

/// Upper limit on trials for runs that keep one result per trial.
///
/// The streaming total has no such limit.
pub const MAX_TRIALS: u32 = 1_000_000;
