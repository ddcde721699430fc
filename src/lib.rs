//! subarray_bench - LCG-driven maximum-subarray benchmark
//!
//! Generates reproducible integer sequences with a 32-bit LCG, solves the
//! maximum contiguous-subarray problem for each (Kadane), and sums the results
//! over a fixed number of seeded trials.
//!
//! # Modules
//!
//! - [`core_types`] - Numeric type aliases (Seed, Sample, TrialSum)
//! - [`error`] - Benchmark error taxonomy
//! - [`bench`] - LCG, sample sequences, trial aggregation
//! - [`solver`] - Kadane, allow-empty variant, naive baseline
//! - [`total`] - i128 total with arbitrary-precision escalation
//! - [`perf`] - Timing breakdown and latency sampling
//! - [`runner`] - Timed runs and result presentation
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;
pub mod error;

pub mod bench;
pub mod solver;
pub mod total;

pub mod config;
pub mod logging;
pub mod perf;
pub mod runner;

// Convenient re-exports at crate root
pub use bench::lcg::Lcg;
pub use bench::sample::{Bounds, Samples, sample_vec, samples};
pub use bench::trials::{
    TrialParams, TrialReport, TrialResult, max_subarray_for_seed, run_trials, run_trials_naive,
    run_trials_parallel, total_max_subarray_sum, trial_seeds,
};
pub use config::{AppConfig, BenchConfig, ConfigError};
pub use core_types::{DEFAULT_TRIALS, MAX_TRIALS, Sample, Seed, TrialSum};
pub use error::BenchError;
pub use perf::PerfMetrics;
pub use runner::{RunOutcome, Strategy, run_benchmark};
pub use solver::{
    SubarrayMode, max_subarray_sum, max_subarray_sum_allow_empty, max_subarray_sum_naive, solve,
};
pub use total::Total;
