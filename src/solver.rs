//! Maximum-Subarray Solver
//!
//! Kadane's algorithm over `i64` samples with an `i128` accumulator.
//!
//! ## Semantics
//! - [`max_subarray_sum`]: best sum over any **non-empty** contiguous run.
//!   This is the reference semantics. An empty input is an error.
//! - [`max_subarray_sum_allow_empty`]: the clamped variant where the empty run
//!   (sum 0) is allowed. Only reachable through [`SubarrayMode::AllowEmpty`].
//! - [`max_subarray_sum_naive`]: O(N²) enumeration, kept as the baseline the
//!   optimized solver is checked and timed against.
//!
//! ## Overflow
//! |x| <= 2^63 for every sample and there are fewer than 2^64 samples, so no
//! partial sum reaches 2^127. Plain `i128` arithmetic cannot overflow here.

use crate::core_types::{Sample, TrialSum};
use crate::error::BenchError;
use serde::{Deserialize, Serialize};

/// Which maximum-subarray contract to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubarrayMode {
    /// Strict Kadane: at least one element.
    #[default]
    NonEmpty,
    /// Running sum clamps at zero; result is never negative.
    AllowEmpty,
}

/// Strict Kadane over a non-empty sequence.
///
/// # Errors
/// * `EmptySequence` - if `values` yields nothing
pub fn max_subarray_sum<I>(values: I) -> Result<TrialSum, BenchError>
where
    I: IntoIterator<Item = Sample>,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or(BenchError::EmptySequence)? as i128;

    let mut best = first;
    let mut running = first;
    for x in iter {
        let x = x as i128;
        running = x.max(running + x);
        best = best.max(running);
    }
    Ok(best)
}

/// Kadane with the empty subarray allowed. Empty input gives 0.
pub fn max_subarray_sum_allow_empty<I>(values: I) -> TrialSum
where
    I: IntoIterator<Item = Sample>,
{
    let mut best: i128 = 0;
    let mut running: i128 = 0;
    for x in values {
        running = (running + x as i128).max(0);
        best = best.max(running);
    }
    best
}

/// Quadratic baseline: every start index, every end index.
pub fn max_subarray_sum_naive(values: &[Sample]) -> Result<TrialSum, BenchError> {
    if values.is_empty() {
        return Err(BenchError::EmptySequence);
    }

    let mut best = i128::MIN;
    for start in 0..values.len() {
        let mut current: i128 = 0;
        for &x in &values[start..] {
            current += x as i128;
            if current > best {
                best = current;
            }
        }
    }
    Ok(best)
}

/// Dispatch on `mode`.
///
/// Empty input is rejected in both modes so a run never mixes an error
/// in one mode with a value in the other.
pub fn solve<I>(mode: SubarrayMode, values: I) -> Result<TrialSum, BenchError>
where
    I: IntoIterator<Item = Sample>,
{
    match mode {
        SubarrayMode::NonEmpty => max_subarray_sum(values),
        SubarrayMode::AllowEmpty => {
            let mut iter = values.into_iter().peekable();
            if iter.peek().is_none() {
                return Err(BenchError::EmptySequence);
            }
            Ok(max_subarray_sum_allow_empty(iter))
        }
    }
}
