//! Naive vs Kadane comparison
//!
//! Runs the configured trials once with the quadratic baseline and once with
//! Kadane, prints both totals and timings, and fails if the totals differ.
//!
//! Usage: `compare_solvers [--env|-e <name>] [--len <n>]`

use std::time::Instant;

use anyhow::Context;

use subarray_bench::config::AppConfig;
use subarray_bench::perf::PerfMetrics;
use subarray_bench::{run_trials, run_trials_naive};

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn run() -> anyhow::Result<bool> {
    let env = arg_value("--env")
        .or_else(|| arg_value("-e"))
        .unwrap_or_else(|| "dev".to_string());
    let mut app_config = AppConfig::load(&env)?;
    if let Some(raw) = arg_value("--len") {
        app_config.bench.length = raw
            .parse()
            .with_context(|| format!("invalid --len value: {}", raw))?;
    }
    let params = app_config.bench.to_params()?;

    let _log_guard = subarray_bench::logging::init_logging(&app_config);

    let mut naive_perf = PerfMetrics::new(app_config.sample_rate);
    let start = Instant::now();
    let naive = run_trials_naive(&params, &mut naive_perf)?;
    let naive_secs = start.elapsed().as_secs_f64();

    let mut fast_perf = PerfMetrics::new(app_config.sample_rate);
    let start = Instant::now();
    let fast = run_trials(&params, &mut fast_perf)?;
    let fast_secs = start.elapsed().as_secs_f64();

    println!(
        "=== Max Subarray: naive vs Kadane (N={}, {} runs) ===",
        params.len, params.trials
    );
    println!("Naive  total: {:>12}   time: {:.6} seconds", naive.total, naive_secs);
    println!("Kadane total: {:>12}   time: {:.6} seconds", fast.total, fast_secs);
    if fast_secs > 0.0 {
        println!("Speedup: {:.1}x", naive_secs / fast_secs);
    }

    let agree = naive.results == fast.results;
    if agree {
        tracing::info!(total = %fast.total, "solvers agree");
    } else {
        for (n, k) in naive.results.iter().zip(&fast.results) {
            if n.max_sum != k.max_sum {
                tracing::error!(
                    trial = n.index,
                    seed = n.seed,
                    naive = %n.max_sum,
                    kadane = %k.max_sum,
                    "solver mismatch"
                );
            }
        }
    }
    Ok(agree)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("error: naive and Kadane totals differ");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
