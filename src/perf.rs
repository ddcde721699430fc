//! Performance Metrics - Timing breakdown and per-trial latency sampling
//!
//! Collects where a run spends its time (sample generation vs. solving) and a
//! latency sample per trial for percentile reporting.

use serde::Serialize;

/// Performance metrics for a benchmark run
#[derive(Debug, Default, Clone)]
pub struct PerfMetrics {
    // Timing breakdown (nanoseconds)
    pub total_generate_ns: u64, // LCG + bounds projection into the buffer
    pub total_solve_ns: u64,    // Kadane (or naive) over the buffer

    // Per-trial latency samples (nanoseconds), every Nth trial
    pub latency_samples: Vec<u64>,
    sample_rate: usize,
    sample_counter: usize,
}

/// Serializable latency digest for reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencySummary {
    pub samples: usize,
    pub min_ns: Option<u64>,
    pub p50_ns: Option<u64>,
    pub p99_ns: Option<u64>,
    pub max_ns: Option<u64>,
    pub avg_ns: Option<u64>,
    pub generate_pct: f64,
    pub solve_pct: f64,
}

impl PerfMetrics {
    /// Create new metrics collector
    ///
    /// # Arguments
    /// * `sample_rate` - Keep every Nth trial latency (0 is treated as 1)
    pub fn new(sample_rate: usize) -> Self {
        PerfMetrics {
            sample_rate: sample_rate.max(1),
            latency_samples: Vec::with_capacity(64),
            ..Default::default()
        }
    }

    /// Record one trial's end-to-end latency (sampled)
    #[inline]
    pub fn add_trial_latency(&mut self, latency_ns: u64) {
        self.sample_counter += 1;
        if self.sample_counter >= self.sample_rate {
            self.latency_samples.push(latency_ns);
            self.sample_counter = 0;
        }
    }

    #[inline]
    pub fn add_generate_time(&mut self, ns: u64) {
        self.total_generate_ns += ns;
    }

    #[inline]
    pub fn add_solve_time(&mut self, ns: u64) {
        self.total_solve_ns += ns;
    }

    /// Calculate percentile from samples
    ///
    /// # Arguments
    /// * `p` - Percentile (0-100), e.g., 50.0 for median, 99.0 for P99
    pub fn percentile(&self, p: f64) -> Option<u64> {
        if self.latency_samples.is_empty() {
            return None;
        }
        let mut sorted = self.latency_samples.clone();
        sorted.sort_unstable();
        let idx = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        Some(sorted[idx.min(sorted.len() - 1)])
    }

    pub fn min_latency(&self) -> Option<u64> {
        self.latency_samples.iter().copied().min()
    }

    pub fn max_latency(&self) -> Option<u64> {
        self.latency_samples.iter().copied().max()
    }

    pub fn avg_latency(&self) -> Option<u64> {
        if self.latency_samples.is_empty() {
            return None;
        }
        Some(self.latency_samples.iter().sum::<u64>() / self.latency_samples.len() as u64)
    }

    pub fn total_tracked_ns(&self) -> u64 {
        self.total_generate_ns + self.total_solve_ns
    }

    /// (generate %, solve %)
    pub fn breakdown_pct(&self) -> (f64, f64) {
        let total = self.total_tracked_ns() as f64;
        if total == 0.0 {
            return (0.0, 0.0);
        }
        (
            self.total_generate_ns as f64 / total * 100.0,
            self.total_solve_ns as f64 / total * 100.0,
        )
    }

    pub fn summary(&self) -> LatencySummary {
        let (generate_pct, solve_pct) = self.breakdown_pct();
        LatencySummary {
            samples: self.latency_samples.len(),
            min_ns: self.min_latency(),
            p50_ns: self.percentile(50.0),
            p99_ns: self.percentile(99.0),
            max_ns: self.max_latency(),
            avg_ns: self.avg_latency(),
            generate_pct,
            solve_pct,
        }
    }
}
