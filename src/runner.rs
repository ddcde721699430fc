//! Benchmark Runner - Timed execution and result presentation
//!
//! Wraps the trial aggregator with wall-clock timing and renders either the
//! two-line console summary or a JSON run report.
//!
//! # Console Output
//! ```text
//! Total Maximum Subarray Sum (20 runs): 10980
//! Execution Time: 0.001234 seconds
//! ```

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bench::trials::{TrialParams, TrialReport, TrialResult, run_trials, run_trials_parallel};
use crate::error::BenchError;
use crate::perf::{LatencySummary, PerfMetrics};
use crate::total::Total;

/// Build identifier baked in by build.rs
pub const BUILD_HASH: &str = env!("GIT_HASH");

/// How trials are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    Sequential,
    Parallel { workers: usize },
}

impl Strategy {
    /// 0 workers means sequential.
    pub fn from_workers(workers: usize) -> Self {
        if workers == 0 {
            Strategy::Sequential
        } else {
            Strategy::Parallel { workers }
        }
    }
}

// ============================================================
// RUN OUTCOME
// ============================================================

/// Result of a timed benchmark run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub started_at: DateTime<Utc>,
    pub params: TrialParams,
    pub strategy: Strategy,
    pub report: TrialReport,
    pub elapsed: Duration,
    /// Empty for parallel runs
    pub perf: PerfMetrics,
}

/// Run all trials and measure wall-clock time.
pub fn run_benchmark(
    params: &TrialParams,
    strategy: Strategy,
    sample_rate: usize,
) -> Result<RunOutcome, BenchError> {
    let mut perf = PerfMetrics::new(sample_rate);
    let started_at = Utc::now();

    tracing::info!(
        len = params.len,
        min = params.bounds.min(),
        max = params.bounds.max(),
        seed = params.initial_seed,
        trials = params.trials,
        ?strategy,
        "benchmark starting"
    );

    let start = Instant::now();
    let report = match strategy {
        Strategy::Sequential => run_trials(params, &mut perf)?,
        Strategy::Parallel { workers } => run_trials_parallel(params, workers)?,
    };
    let elapsed = start.elapsed();

    if report.total.is_wide() {
        tracing::warn!("total exceeded i128, reported with arbitrary precision");
    }
    tracing::info!(
        total = %report.total,
        elapsed_us = elapsed.as_micros() as u64,
        "benchmark finished"
    );

    Ok(RunOutcome {
        started_at,
        params: params.clone(),
        strategy,
        report,
        elapsed,
        perf,
    })
}

// ============================================================
// PRESENTATION
// ============================================================

/// The two stdout lines: total, then elapsed seconds with 6 decimals.
pub fn summary_lines(outcome: &RunOutcome) -> [String; 2] {
    [
        format!(
            "Total Maximum Subarray Sum ({} runs): {}",
            outcome.params.trials, outcome.report.total
        ),
        format!("Execution Time: {:.6} seconds", outcome.elapsed.as_secs_f64()),
    ]
}

/// JSON run report
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub started_at: DateTime<Utc>,
    pub build: &'static str,
    pub params: &'a TrialParams,
    pub strategy: Strategy,
    pub total: &'a Total,
    pub elapsed_secs: f64,
    pub trials: &'a [TrialResult],
    pub latency: LatencySummary,
}

impl<'a> RunSummary<'a> {
    pub fn from_outcome(outcome: &'a RunOutcome) -> Self {
        Self {
            started_at: outcome.started_at,
            build: BUILD_HASH,
            params: &outcome.params,
            strategy: outcome.strategy,
            total: &outcome.report.total,
            elapsed_secs: outcome.elapsed.as_secs_f64(),
            trials: &outcome.report.results,
            latency: outcome.perf.summary(),
        }
    }
}

pub fn summary_json(outcome: &RunOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RunSummary::from_outcome(outcome))
}
