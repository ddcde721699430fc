//! Seeded Trial Aggregator
//!
//! One run = `trials` generate-then-solve cycles. A seed generator, seeded
//! with `initial_seed`, is advanced one step per trial; the new state seeds a
//! fresh sample generator for that trial.
//!
//! ```text
//! initial_seed ──▶ Lcg ──step──▶ seed_0 ──▶ samples ──▶ solve ──┐
//!                      ──step──▶ seed_1 ──▶ samples ──▶ solve ──┼──▶ Total
//!                      ...                                      │
//!                      ──step──▶ seed_19 ─▶ samples ──▶ solve ──┘
//! ```
//!
//! Seed advancement is sequential. The parallel path precomputes every seed
//! first and only fans out the (then independent) solver calls.

use std::thread;
use std::time::Instant;

use crossbeam_queue::ArrayQueue;
use serde::Serialize;

use crate::bench::lcg::Lcg;
use crate::bench::sample::{Bounds, sample_vec, samples};
use crate::core_types::{DEFAULT_TRIALS, MAX_TRIALS, Sample, Seed, TrialSum};
use crate::error::BenchError;
use crate::logging::TRIAL_TARGET;
use crate::perf::PerfMetrics;
use crate::solver::{self, SubarrayMode};
use crate::total::Total;

/// Validated run parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialParams {
    /// Samples per trial (N)
    pub len: usize,
    pub bounds: Bounds,
    pub initial_seed: Seed,
    pub trials: u32,
    pub mode: SubarrayMode,
}

impl TrialParams {
    /// Default trial count and the strict (non-empty) solver.
    pub fn new(len: usize, bounds: Bounds, initial_seed: Seed) -> Self {
        Self {
            len,
            bounds,
            initial_seed,
            trials: DEFAULT_TRIALS,
            mode: SubarrayMode::default(),
        }
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_mode(mut self, mode: SubarrayMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Outcome of a single trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub index: u32,
    pub seed: Seed,
    pub max_sum: TrialSum,
}

/// All trial outcomes, ordered by index, plus their total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialReport {
    pub results: Vec<TrialResult>,
    pub total: Total,
}

/// Per-trial seeds, computed sequentially from `initial_seed`.
pub fn trial_seeds(initial_seed: Seed, trials: u32) -> Vec<Seed> {
    Lcg::new(initial_seed).take(trials as usize).collect()
}

/// Maximum subarray sum of `len` samples generated from `seed`.
///
/// Streams the samples, O(1) memory.
pub fn max_subarray_for_seed(
    len: usize,
    seed: Seed,
    bounds: Bounds,
    mode: SubarrayMode,
) -> Result<TrialSum, BenchError> {
    solver::solve(mode, samples(seed, bounds, len))
}

/// Sum of the per-trial maxima, streaming every trial.
///
/// Keeps no per-trial state, so `trials` is not capped by [`MAX_TRIALS`].
///
/// # Errors
/// * `EmptySequence` - if `params.len == 0`, even when `trials == 0`
pub fn total_max_subarray_sum(params: &TrialParams) -> Result<Total, BenchError> {
    ensure_non_empty(params)?;

    let mut seeds = Lcg::new(params.initial_seed);
    let mut total = Total::zero();
    for _ in 0..params.trials {
        let seed = seeds.next_state();
        total.add(max_subarray_for_seed(
            params.len,
            seed,
            params.bounds,
            params.mode,
        )?);
    }
    Ok(total)
}

/// Sequential run with Kadane, recording per-trial results and timings.
///
/// # Errors
/// * `EmptySequence` - if `params.len == 0`
/// * `TooManyTrials` - if `params.trials > MAX_TRIALS`
pub fn run_trials(
    params: &TrialParams,
    perf: &mut PerfMetrics,
) -> Result<TrialReport, BenchError> {
    let mode = params.mode;
    run_buffered(params, perf, |values| solver::solve(mode, values.iter().copied()))
}

/// Sequential run with the quadratic baseline solver.
pub fn run_trials_naive(
    params: &TrialParams,
    perf: &mut PerfMetrics,
) -> Result<TrialReport, BenchError> {
    let mode = params.mode;
    run_buffered(params, perf, |values| {
        let strict = solver::max_subarray_sum_naive(values)?;
        Ok(match mode {
            SubarrayMode::NonEmpty => strict,
            SubarrayMode::AllowEmpty => strict.max(0),
        })
    })
}

/// Parallel run: seeds first, then `workers` threads drain a work queue.
///
/// Produces the same report as [`run_trials`].
pub fn run_trials_parallel(
    params: &TrialParams,
    workers: usize,
) -> Result<TrialReport, BenchError> {
    if workers == 0 {
        return Err(BenchError::NoWorkers);
    }
    ensure_non_empty(params)?;
    ensure_trial_limit(params)?;

    let seeds = trial_seeds(params.initial_seed, params.trials);
    // ArrayQueue rejects a zero capacity
    let capacity = seeds.len().max(1);

    let work: ArrayQueue<(u32, Seed)> = ArrayQueue::new(capacity);
    for (index, &seed) in seeds.iter().enumerate() {
        // Capacity equals the seed count, push cannot fail
        let _ = work.push((index as u32, seed));
    }
    let done: ArrayQueue<Result<TrialResult, BenchError>> = ArrayQueue::new(capacity);

    let workers = workers.min(capacity);
    tracing::debug!(workers, trials = seeds.len(), "starting parallel trials");

    thread::scope(|s| {
        for worker in 0..workers {
            let work = &work;
            let done = &done;
            s.spawn(move || {
                let mut handled = 0usize;
                while let Some((index, seed)) = work.pop() {
                    let outcome =
                        max_subarray_for_seed(params.len, seed, params.bounds, params.mode)
                            .map(|max_sum| TrialResult {
                                index,
                                seed,
                                max_sum,
                            });
                    let _ = done.push(outcome);
                    handled += 1;
                }
                tracing::debug!(target: TRIAL_TARGET, worker, handled, "worker finished");
            });
        }
    });

    let mut results = Vec::with_capacity(seeds.len());
    while let Some(outcome) = done.pop() {
        results.push(outcome?);
    }
    results.sort_unstable_by_key(|r| r.index);

    // Sum in trial order so escalation happens at the same point as sequentially
    let total = results.iter().map(|r| r.max_sum).collect();
    Ok(TrialReport { results, total })
}

fn ensure_non_empty(params: &TrialParams) -> Result<(), BenchError> {
    if params.len == 0 {
        return Err(BenchError::EmptySequence);
    }
    Ok(())
}

fn ensure_trial_limit(params: &TrialParams) -> Result<(), BenchError> {
    if params.trials > MAX_TRIALS {
        return Err(BenchError::TooManyTrials {
            requested: u64::from(params.trials),
            max: MAX_TRIALS,
        });
    }
    Ok(())
}

fn run_buffered<F>(
    params: &TrialParams,
    perf: &mut PerfMetrics,
    solve: F,
) -> Result<TrialReport, BenchError>
where
    F: Fn(&[Sample]) -> Result<TrialSum, BenchError>,
{
    ensure_non_empty(params)?;
    ensure_trial_limit(params)?;

    let mut seeds = Lcg::new(params.initial_seed);
    let mut results = Vec::with_capacity(params.trials.min(1024) as usize);
    let mut total = Total::zero();

    for index in 0..params.trials {
        let seed = seeds.next_state();

        let t0 = Instant::now();
        let values = sample_vec(seed, params.bounds, params.len);
        let t1 = Instant::now();
        let max_sum = solve(&values)?;
        let t2 = Instant::now();

        perf.add_generate_time((t1 - t0).as_nanos() as u64);
        perf.add_solve_time((t2 - t1).as_nanos() as u64);
        perf.add_trial_latency((t2 - t0).as_nanos() as u64);

        tracing::debug!(target: TRIAL_TARGET, index, seed, max_sum = %max_sum, "trial done");

        total.add(max_sum);
        results.push(TrialResult {
            index,
            seed,
            max_sum,
        });
    }

    Ok(TrialReport { results, total })
}
